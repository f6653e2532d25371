//! Built-in seed set restored by `reset`.

/// Baseline quotations assigned ids `1..=N` in array order on reset.
pub const SEED_QUOTES: [&str; 14] = [
    "The only thing we have to fear is fear itself.",
    "That's one small step for man, one giant leap for mankind.",
    "Ask not what your country can do for you; ask what you can do for your country.",
    "To be, or not to be, that is the question.",
    "The unexamined life is not worth living.",
    "Injustice anywhere is a threat to justice everywhere.",
    "Give me liberty, or give me death!",
    "Imagination is more important than knowledge.",
    "In the middle of difficulty lies opportunity.",
    "Be the change that you wish to see in the world.",
    "Not all those who wander are lost.",
    "The journey of a thousand miles begins with a single step.",
    "Fortune favors the bold.",
    "Stay hungry, stay foolish.",
];
