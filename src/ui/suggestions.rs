/// Example phrases offered as one-click inputs, in display order.
pub const SUGGESTIONS: [&str; 10] = [
    "Hello, how are you?",
    "The weather is nice today.",
    "I love programming and machine learning.",
    "What time is it?",
    "Can you help me with this?",
    "Thank you very much!",
    "Where is the nearest restaurant?",
    "I'm learning Spanish.",
    "Have a great day!",
    "How much does this cost?",
];

pub fn suggestion(index: usize) -> Option<&'static str> {
    SUGGESTIONS.get(index).copied()
}
