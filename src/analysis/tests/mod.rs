mod common;
mod feedback;
mod red_flags;
mod scoring;
