//! Shared answer fixtures for the analysis unit tests.

/// Roughly 120 words, full STAR coverage, heavy ownership vocabulary, one
/// percentage metric, and no hedging. Should score near the top on every
/// axis and raise no red flags.
pub(super) fn strong_answer() -> &'static str {
    "At my previous company, our release pipeline kept failing during a critical launch \
     window, and the situation put the entire project at risk. The challenge was severe \
     because my task was to restore deployments within two days, and I was responsible \
     for coordinating three engineers. I took action immediately: I led the debugging \
     effort, implemented a caching fix, and organized a rotating on-call schedule so the \
     team stayed focused. I decided to cut nonessential features and explained that \
     tradeoff to stakeholders, which helped us overcome the schedule pressure. As a \
     result, we delivered the release on time and reduced deployment failures by 40%. \
     Ultimately the outcome improved our on-call rotation and the success taught me how \
     to steer a team through pressure."
}

/// Nine words, vague and hedged. Trips the short-answer tiers.
pub(super) fn brief_answer() -> &'static str {
    "I worked hard and it went well I guess."
}

/// Around eighty words leaning on "we" six times with a single "I", result
/// language present but not a number in sight.
pub(super) fn we_heavy_answer() -> &'static str {
    "During the migration project we divided the workload across the group and we met \
     every morning to review progress. Over the following weeks we rewrote the billing \
     service, and we moved the reporting jobs to the new cluster. Whenever something \
     broke we paused the rollout and we traced the regression together as a group. I \
     supported the testing effort throughout. The result was a smoother release process \
     for the whole department, and the outcome made the quarterly planning much calmer."
}
