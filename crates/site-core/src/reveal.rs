/// What an intersection update should do to its element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealEvent {
    /// First time in view: apply the reveal class.
    Revealed,
    /// In view again after having left it.
    Reentered,
    Left,
    None,
}

/// One-shot visibility tracking for a fixed set of observed elements.
#[derive(Clone, Debug, Default)]
pub struct RevealSet {
    fired: Vec<bool>,
    visible: Vec<bool>,
}

impl RevealSet {
    pub fn new(len: usize) -> Self {
        Self {
            fired: vec![false; len],
            visible: vec![false; len],
        }
    }

    pub fn len(&self) -> usize {
        self.fired.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fired.is_empty()
    }

    pub fn has_fired(&self, index: usize) -> bool {
        self.fired.get(index).copied().unwrap_or(false)
    }

    pub fn observe(&mut self, index: usize, intersecting: bool) -> RevealEvent {
        let (Some(fired), Some(visible)) = (self.fired.get_mut(index), self.visible.get_mut(index))
        else {
            return RevealEvent::None;
        };
        let was_visible = *visible;
        *visible = intersecting;
        match (intersecting, was_visible, *fired) {
            (true, _, false) => {
                *fired = true;
                RevealEvent::Revealed
            }
            (true, false, true) => RevealEvent::Reentered,
            (false, true, _) => RevealEvent::Left,
            _ => RevealEvent::None,
        }
    }
}

/// A list item that opens an external URL once its click animation played.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeferredLink {
    pub url: String,
    pub delay_ms: u32,
}

impl DeferredLink {
    /// Only absolute http(s) URLs are opened.
    pub fn parse(url: &str, delay_ms: u32) -> Option<Self> {
        let url = url.trim();
        let lower = url.to_ascii_lowercase();
        if lower.starts_with("https://") || lower.starts_with("http://") {
            Some(Self {
                url: url.to_string(),
                delay_ms,
            })
        } else {
            None
        }
    }
}
