/// A line made of plain text followed by one highlighted word.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Phrase {
    pub prefix: &'static str,
    pub word: &'static str,
    pub class: &'static str,
}

impl Phrase {
    pub fn len(&self) -> usize {
        self.prefix.chars().count() + self.word.chars().count()
    }

    /// The first `visible` characters, split into the plain and the
    /// highlighted part.
    pub fn split(&self, visible: usize) -> (&'static str, &'static str) {
        let prefix_len = self.prefix.chars().count();
        if visible <= prefix_len {
            (cut(self.prefix, visible), "")
        } else {
            (self.prefix, cut(self.word, visible - prefix_len))
        }
    }

    fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.prefix.chars().chain(self.word.chars())
    }
}

fn cut(text: &str, chars: usize) -> &str {
    match text.char_indices().nth(chars) {
        Some((byte, _)) => &text[..byte],
        None => text,
    }
}

fn shared_prefix(a: &Phrase, b: &Phrase) -> usize {
    a.chars().zip(b.chars()).take_while(|(x, y)| x == y).count()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Typing,
    Holding,
    Deleting,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Speeds {
    pub type_ms: u32,
    pub back_ms: u32,
    pub hold_ms: u32,
}

impl Default for Speeds {
    fn default() -> Self {
        Self { type_ms: 50, back_ms: 50, hold_ms: 8_000 }
    }
}

/// Types each phrase, holds it, then backspaces only down to what the next
/// phrase shares with it. Loops forever.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Typewriter {
    phrases: &'static [Phrase],
    speeds: Speeds,
    pub index: usize,
    pub visible: usize,
    pub phase: Phase,
}

impl Typewriter {
    pub fn new(phrases: &'static [Phrase], speeds: Speeds) -> Self {
        Self { phrases, speeds, index: 0, visible: 0, phase: Phase::Typing }
    }

    pub fn current(&self) -> Option<&'static Phrase> {
        self.phrases.get(self.index)
    }

    pub fn shown(&self) -> (&'static str, &'static str) {
        self.current().map(|p| p.split(self.visible)).unwrap_or(("", ""))
    }

    /// Milliseconds to wait before the next [`step`](Self::step).
    pub fn delay(&self) -> u32 {
        match self.phase {
            Phase::Typing => self.speeds.type_ms,
            Phase::Holding => self.speeds.hold_ms,
            Phase::Deleting => self.speeds.back_ms,
        }
    }

    pub fn step(self) -> Self {
        let Some(phrase) = self.current() else {
            return self;
        };
        let next_index = (self.index + 1) % self.phrases.len();
        match self.phase {
            Phase::Typing => {
                let visible = (self.visible + 1).min(phrase.len());
                let phase = if visible == phrase.len() { Phase::Holding } else { Phase::Typing };
                Self { visible, phase, ..self }
            }
            Phase::Holding => Self { phase: Phase::Deleting, ..self },
            Phase::Deleting => {
                let keep = shared_prefix(phrase, &self.phrases[next_index]);
                let visible = self.visible.saturating_sub(1).max(keep);
                if visible == keep {
                    Self { index: next_index, visible, phase: Phase::Typing, ..self }
                } else {
                    Self { visible, ..self }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PHRASES: &[Phrase] = &[
        Phrase { prefix: "To ", word: "AB", class: "a" },
        Phrase { prefix: "To ", word: "CD", class: "c" },
    ];

    fn run(mut writer: Typewriter, steps: usize) -> Typewriter {
        for _ in 0..steps {
            writer = writer.step();
        }
        writer
    }

    #[test]
    fn splits_plain_and_highlighted_parts() {
        let phrase = PHRASES[0];
        assert_eq!(phrase.split(0), ("", ""));
        assert_eq!(phrase.split(2), ("To", ""));
        assert_eq!(phrase.split(4), ("To ", "A"));
        assert_eq!(phrase.split(99), ("To ", "AB"));
    }

    #[test]
    fn types_then_holds() {
        let writer = Typewriter::new(PHRASES, Speeds::default());
        assert_eq!(writer.delay(), 50);
        let writer = run(writer, 5);
        assert_eq!(writer.phase, Phase::Holding);
        assert_eq!(writer.shown(), ("To ", "AB"));
        assert_eq!(writer.delay(), 8_000);
    }

    #[test]
    fn backspaces_to_the_shared_prefix() {
        let writer = run(Typewriter::new(PHRASES, Speeds::default()), 6);
        assert_eq!(writer.phase, Phase::Deleting);
        let writer = writer.step();
        assert_eq!(writer.shown(), ("To ", "A"));
        let writer = writer.step();
        assert_eq!(writer.index, 1);
        assert_eq!(writer.phase, Phase::Typing);
        assert_eq!(writer.shown(), ("To ", ""));
        let writer = run(writer, 2);
        assert_eq!(writer.shown(), ("To ", "CD"));
    }

    #[test]
    fn loops_back_to_the_first_phrase() {
        // 5 typed, hold, 2 deleted, 2 typed, hold, 2 deleted
        let writer = run(Typewriter::new(PHRASES, Speeds::default()), 13);
        assert_eq!(writer.index, 0);
        assert_eq!(writer.phase, Phase::Typing);
        assert_eq!(writer.visible, 3);
    }

    #[test]
    fn empty_list_stays_put() {
        let writer = Typewriter::new(&[], Speeds::default());
        assert_eq!(writer.step(), writer);
        assert_eq!(writer.shown(), ("", ""));
    }
}
