//! Built-in reflection questions

/// Adopted from https://www.usa.edu/blog/self-discovery-questions/
pub const QUESTIONS: &[&str] = &[
    "What are three of my most cherished personal values?",
    "What is my purpose in life?",
    "What is my personality type?",
    "Did I make time for myself this week?",
    "Am I making time for my social life?",
    "What scares me the most right now?",
    "What is something I find inspiring?",
    "What is something that brings me joy?",
    "When is the last time I gave back to others?",
    "What matters to me most right now?",
];

pub fn questions() -> Vec<String> {
    QUESTIONS.iter().map(|q| q.to_string()).collect()
}
