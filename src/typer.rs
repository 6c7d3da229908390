pub const PHRASES: &[&str] = &[
    "Drive Growth.",
    "Convert Visitors.",
    "Stand Out.",
    "Generate Leads.",
    "Boost Sales.",
];

pub const TYPE_DELAY_MS: u32 = 150;
pub const DELETE_DELAY_MS: u32 = 50;
pub const FULL_PAUSE_MS: u32 = 2_000;
pub const EMPTY_PAUSE_MS: u32 = 500;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TyperPhase {
    Typing,
    PausingFull,
    Deleting,
    PausingEmpty,
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct TypedFrame {
    pub text: String,
    pub delay_ms: u32,
    pub phase: TyperPhase,
}

/// Type/delete loop over a fixed phrase list. Each `tick` adds or removes one
/// character and reports how long to wait before the next tick.
#[derive(Clone, Debug)]
pub struct Typewriter {
    phrases: &'static [&'static str],
    word: usize,
    chars: usize,
    deleting: bool,
}

impl Typewriter {
    pub fn new(phrases: &'static [&'static str]) -> Option<Self> {
        if phrases.is_empty() {
            return None;
        }

        Some(Self {
            phrases,
            word: 0,
            chars: 0,
            deleting: false,
        })
    }

    pub fn word_index(&self) -> usize {
        self.word
    }

    /// Text to show when motion is off: the first phrase, fully typed.
    pub fn resting_text(&self) -> &'static str {
        self.phrases[0]
    }

    fn current(&self) -> &'static str {
        self.phrases[self.word]
    }

    pub fn tick(&mut self) -> TypedFrame {
        let word = self.current();
        let length = word.chars().count();

        let (mut delay_ms, mut phase) = if self.deleting {
            self.chars = self.chars.saturating_sub(1);
            (DELETE_DELAY_MS, TyperPhase::Deleting)
        } else {
            self.chars = (self.chars + 1).min(length);
            (TYPE_DELAY_MS, TyperPhase::Typing)
        };
        let text: String = word.chars().take(self.chars).collect();

        if !self.deleting && self.chars == length {
            delay_ms = FULL_PAUSE_MS;
            phase = TyperPhase::PausingFull;
            self.deleting = true;
        } else if self.deleting && self.chars == 0 {
            delay_ms = EMPTY_PAUSE_MS;
            phase = TyperPhase::PausingEmpty;
            self.deleting = false;
            self.word = (self.word + 1) % self.phrases.len();
        }

        TypedFrame {
            text,
            delay_ms,
            phase,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_until_word_changes(typer: &mut Typewriter) -> Vec<TypedFrame> {
        let start = typer.word_index();
        let mut frames = Vec::new();
        while typer.word_index() == start {
            frames.push(typer.tick());
        }
        frames
    }

    #[test]
    fn empty_phrase_list_is_rejected() {
        assert!(Typewriter::new(&[]).is_none());
    }

    #[test]
    fn types_then_pauses_then_deletes() {
        let mut typer = Typewriter::new(&["Hey"]).expect("phrases");
        let frames: Vec<_> = (0..7).map(|_| typer.tick()).collect();

        let texts: Vec<_> = frames.iter().map(|frame| frame.text.as_str()).collect();
        assert_eq!(texts, ["H", "He", "Hey", "He", "H", "", "H"]);

        let delays: Vec<_> = frames.iter().map(|frame| frame.delay_ms).collect();
        assert_eq!(delays, [150, 150, 2_000, 50, 50, 500, 150]);

        assert_eq!(frames[2].phase, TyperPhase::PausingFull);
        assert_eq!(frames[3].phase, TyperPhase::Deleting);
        assert_eq!(frames[5].phase, TyperPhase::PausingEmpty);
    }

    #[test]
    fn cycles_phrases_in_order_and_wraps() {
        let mut typer = Typewriter::new(PHRASES).expect("phrases");
        let mut order = vec![typer.word_index()];

        for _ in 0..PHRASES.len() {
            let frames = run_until_word_changes(&mut typer);
            let longest = frames
                .iter()
                .max_by_key(|frame| frame.text.chars().count())
                .expect("frames");
            assert_eq!(longest.text, PHRASES[order[order.len() - 1]]);
            order.push(typer.word_index());
        }

        assert_eq!(order, [0, 1, 2, 3, 4, 0]);
    }

    #[test]
    fn slices_by_character_not_byte() {
        let mut typer = Typewriter::new(&["né"]).expect("phrases");

        assert_eq!(typer.tick().text, "n");
        assert_eq!(typer.tick().text, "né");
    }

    #[test]
    fn resting_text_is_the_first_phrase() {
        let typer = Typewriter::new(PHRASES).expect("phrases");

        assert_eq!(typer.resting_text(), "Drive Growth.");
    }
}
