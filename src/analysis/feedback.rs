//! Narrative feedback composed from the intermediate verdicts.
//!
//! Sections appear in a fixed order: red flags, relevance concerns, structure,
//! ownership and confidence, clarity, a missing-metrics advisory, then the
//! overall verdict. Sections with nothing to say are omitted entirely rather
//! than left as empty placeholders.

use super::lexicon::METRIC_PATTERN;
use super::red_flags::RedFlag;
use super::relevance::RelevanceVerdict;
use super::star::StarComponents;

/// Compose the candidate-facing feedback for a scored answer.
///
/// Scores arrive post-penalty so the narrative tiers agree with the numbers
/// the candidate sees.
pub(crate) fn generate(
    clarity: u8,
    confidence: u8,
    structure: u8,
    answer_lower: &str,
    red_flags: &[RedFlag],
    relevance: Option<&RelevanceVerdict>,
) -> String {
    let mut parts: Vec<String> = Vec::new();
    let avg_score = f64::from(u32::from(clarity) + u32::from(confidence) + u32::from(structure)) / 3.0;

    // Dealbreakers first, capped at three.
    if !red_flags.is_empty() {
        parts.push("CRITICAL ISSUES DETECTED:".to_string());
        for flag in red_flags.iter().take(3) {
            parts.push(format!("- {}", flag.description()));
        }
        parts.push(String::new());
    }

    if let Some(verdict) = relevance {
        if !verdict.issues.is_empty() {
            parts.push("RELEVANCE CONCERNS:".to_string());
            for issue in verdict.issues.iter().take(2) {
                parts.push(format!("- {issue}"));
            }
            parts.push(String::new());
        }
    }

    let components = StarComponents::detect(answer_lower);
    let present = components.present_labels();
    let missing = components.missing_labels();

    parts.push("STRUCTURE ANALYSIS:".to_string());
    if structure >= 8 {
        parts.push("- Strong STAR method execution. All components clearly present.".to_string());
    } else if structure >= 5 {
        let found = if present.is_empty() {
            "None".to_string()
        } else {
            present.join(", ")
        };
        parts.push(format!("- Partial STAR structure detected. Found: {found}."));
        if !missing.is_empty() {
            parts.push(format!(
                "- Missing: {}. An incomplete STAR answer reads as an incomplete answer.",
                missing.join(", ")
            ));
        }
    } else if structure >= 3 {
        parts.push("- Weak structure. Your answer rambles without clear organization.".to_string());
        parts.push(format!(
            "- Missing STAR components: {}.",
            missing.join(", ")
        ));
        parts.push(
            "- Interviewers are trained to detect missing structure - this would hurt your scorecard."
                .to_string(),
        );
    } else {
        parts.push(
            "- No discernible STAR structure. This is a fundamental requirement for behavioral interviews."
                .to_string(),
        );
        parts.push(
            "- At a top-tier company, this answer would receive a 'Not Inclined' rating.".to_string(),
        );
    }
    parts.push(String::new());

    parts.push("OWNERSHIP & CONFIDENCE:".to_string());
    let we_count = answer_lower.matches(" we ").count();
    let i_count = answer_lower.matches(" i ").count();

    if confidence >= 8 {
        parts.push(
            "- Good use of first-person ownership. You clearly articulated your individual contributions."
                .to_string(),
        );
    } else if confidence >= 5 {
        if we_count > i_count {
            parts.push(
                "- Too much 'we' and not enough 'I'. Interviewers want to know what YOU did, not your team."
                    .to_string(),
            );
            parts.push(
                "- Hiring managers will ask: 'But what was YOUR specific contribution?'".to_string(),
            );
        } else {
            parts.push(
                "- Moderate confidence shown. Add more action verbs (led, drove, delivered, achieved)."
                    .to_string(),
            );
        }
    } else if confidence >= 3 {
        parts.push(
            "- Weak ownership demonstrated. You sound unsure of your own contributions.".to_string(),
        );
        parts.push(
            "- Hedging words like 'maybe', 'I think', 'sort of' undermine your credibility."
                .to_string(),
        );
    } else {
        parts.push(
            "- Poor confidence projection. In a real interview, this would raise doubts about your capabilities."
                .to_string(),
        );
        parts.push(
            "- Senior interviewers specifically look for candidates who can clearly articulate their impact."
                .to_string(),
        );
    }
    parts.push(String::new());

    parts.push("CLARITY & COMMUNICATION:".to_string());
    if clarity >= 8 {
        parts.push("- Clear, well-structured sentences. Easy to follow your narrative.".to_string());
    } else if clarity >= 5 {
        parts.push(
            "- Acceptable clarity but could be sharper. Aim for concise, punchy sentences."
                .to_string(),
        );
        parts.push(
            "- Remember: interviewers are evaluating 5-8 candidates. Make your points memorable."
                .to_string(),
        );
    } else if clarity >= 3 {
        parts.push("- Unclear communication. Sentences are either too long or too choppy.".to_string());
        parts.push(
            "- Practice the 'headline + details' approach: state your point, then elaborate."
                .to_string(),
        );
    } else {
        parts.push("- Very poor clarity. Hard to understand your main points.".to_string());
        parts.push(
            "- This would be flagged as a communication concern in interviewer feedback.".to_string(),
        );
    }
    parts.push(String::new());

    let has_metrics = METRIC_PATTERN.is_match(answer_lower);
    if !has_metrics && avg_score < 8.0 {
        parts.push("MISSING METRICS:".to_string());
        parts.push("- No quantifiable results mentioned. Interviewers love numbers.".to_string());
        parts.push(
            "- Add metrics like: '20% improvement', 'reduced from 2 weeks to 3 days', '$50K saved'."
                .to_string(),
        );
        parts.push(String::new());
    }

    parts.push("OVERALL ASSESSMENT:".to_string());
    if avg_score >= 8.0 {
        parts.push(
            "- STRONG RESPONSE - Would likely receive a 'Strong Hire' signal for behavioral fit."
                .to_string(),
        );
        parts.push(
            "- This demonstrates the depth and structure expected at top tech companies.".to_string(),
        );
    } else if avg_score >= 6.0 {
        parts.push("- ACCEPTABLE RESPONSE - 'Inclined' but not exceptional.".to_string());
        parts.push("- In a competitive loop, this might not be enough. Aim higher.".to_string());
    } else if avg_score >= 4.0 {
        parts.push("- WEAK RESPONSE - Would likely receive a 'Not Inclined' rating.".to_string());
        parts.push("- In a bar-raiser style interview, this would be concerning.".to_string());
        parts.push("- You need significant improvement in structure and specificity.".to_string());
    } else if avg_score >= 2.0 {
        parts.push("- POOR RESPONSE - Would result in 'Strong No Hire' feedback.".to_string());
        parts.push("- This answer shows lack of preparation for behavioral interviews.".to_string());
        parts.push(
            "- Recommend: Study the STAR method, prepare 6-8 stories with specific metrics."
                .to_string(),
        );
    } else {
        parts.push(
            "- UNACCEPTABLE RESPONSE - Interview would likely be stopped early.".to_string(),
        );
        parts.push(
            "- This type of answer suggests either an unprepared candidate or poor fit.".to_string(),
        );
        parts.push(
            "- Action required: Complete preparation overhaul before real interviews.".to_string(),
        );
    }

    parts.join("\n")
}

/// Feedback for answers rejected at the gibberish gate.
pub(crate) fn rejection(issues: &[String]) -> String {
    format!(
        "This response cannot be evaluated. {} \
         In a real interview this type of response would immediately disqualify you. \
         Please provide a genuine, thoughtful answer that describes a specific situation \
         from your experience.",
        issues.join(" ")
    )
}
