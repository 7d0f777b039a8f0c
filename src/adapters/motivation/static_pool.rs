//! Static in-memory message pool.
//!
//! Picks uniformly at random from a fixed pool of Polish messages. Used
//! when no OpenRouter API key is configured, and in tests.

use async_trait::async_trait;
use rand::Rng;

use crate::ports::{GeneratorError, MessageGenerator};

const MESSAGES: &[&str] = &[
    "Każda wysłana aplikacja to krok bliżej celu. Dziś też zrobisz postęp!",
    "Odrzucenie to nie koniec, tylko przekierowanie. Twoja oferta jest coraz bliżej.",
    "Śledzisz swoje aplikacje, a to znaczy, że działasz z planem. Tak trzymaj!",
    "Rekrutacje bywają długie, ale Twoja wytrwałość robi różnicę. Nie odpuszczaj!",
    "Każda rozmowa to trening. Z każdą kolejną jesteś coraz lepszy.",
    "Dziś dobry dzień, żeby odezwać się do jednej nowej firmy. Powodzenia!",
    "Twoje umiejętności mają wartość. Właściwy pracodawca to dostrzeże.",
    "Mały krok dziennie wystarczy. Liczy się konsekwencja, a tę już masz.",
];

/// Generator backed by a fixed message pool.
#[derive(Debug, Default)]
pub struct StaticPoolGenerator;

impl StaticPoolGenerator {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl MessageGenerator for StaticPoolGenerator {
    async fn generate(&self) -> Result<String, GeneratorError> {
        let index = rand::thread_rng().gen_range(0..MESSAGES.len());
        Ok(MESSAGES[index].to_string())
    }
}
