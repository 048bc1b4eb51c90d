use rand::{
    seq::SliceRandom,
    Rng,
};

pub const SYMBOL_POOL: [&str; 16] = [
    "🐍", "🤖", "🧠", "📊", "💻", "📚", "⚙️", "🔬", "🛰️", "🚀", "💡", "🧪", "📡", "🔧", "📝", "🗂️",
];

/// Picks `pairs` distinct symbols (capped at the pool size), doubles them and
/// shuffles the result uniformly.
pub fn build_deck<R: Rng + ?Sized>(pairs: usize, rng: &mut R) -> Vec<&'static str> {
    let mut pool = SYMBOL_POOL.to_vec();
    pool.shuffle(rng);
    pool.truncate(pairs.min(SYMBOL_POOL.len()));

    let mut deck = pool.repeat(2);
    deck.shuffle(rng);
    deck
}
