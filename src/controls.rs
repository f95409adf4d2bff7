/// Keyboard controls: debug toggle, strength nudges and the URL buffer.
#[derive(Clone, Debug, PartialEq)]
pub enum KeyCommand {
    ToggleDebug,
    StrengthUp,
    StrengthDown,
    Type(char),
    Backspace,
    Submit,
}

/// Map a `KeyboardEvent.key` value to a command. Chords are ignored.
pub fn key_command(key: &str, has_modifier: bool) -> Option<KeyCommand> {
    if has_modifier {
        return None;
    }
    match key {
        "Escape" => Some(KeyCommand::ToggleDebug),
        "ArrowUp" => Some(KeyCommand::StrengthUp),
        "ArrowDown" => Some(KeyCommand::StrengthDown),
        "Backspace" => Some(KeyCommand::Backspace),
        "Enter" => Some(KeyCommand::Submit),
        _ => {
            // Named keys ("Tab", "F5", ...) are longer than one code point
            let mut chars = key.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Some(KeyCommand::Type(c)),
                _ => None,
            }
        }
    }
}

/// Navigate-and-record-history capability of the host page.
pub trait Navigator {
    fn origin(&self) -> String;
    /// Rewrite the current history entry without navigating.
    fn replace_url(&mut self, url: &str) -> anyhow::Result<()>;
    /// Leave the page for `url`, keeping the bare origin in history.
    fn navigate(&mut self, url: &str) -> anyhow::Result<()>;
}

/// Path typed blind on the keyboard, mirrored into the address bar.
#[derive(Clone, Debug, Default)]
pub struct UrlBuffer {
    text: String,
}

impl UrlBuffer {
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    #[inline]
    pub fn url(&self, origin: &str) -> String {
        format!("{}/{}", origin, self.text)
    }

    pub fn push(&mut self, c: char, nav: &mut impl Navigator) -> anyhow::Result<()> {
        self.text.push(c);
        let url = self.url(&nav.origin());
        nav.replace_url(&url)
    }

    pub fn backspace(&mut self, nav: &mut impl Navigator) -> anyhow::Result<()> {
        self.text.pop();
        let url = self.url(&nav.origin());
        nav.replace_url(&url)
    }

    /// Navigate to the typed path. Does nothing while the buffer is empty.
    pub fn submit(&mut self, nav: &mut impl Navigator) -> anyhow::Result<bool> {
        if self.text.is_empty() {
            return Ok(false);
        }
        let origin = nav.origin();
        nav.replace_url(&origin)?;
        nav.navigate(&self.url(&origin))?;
        Ok(true)
    }
}
