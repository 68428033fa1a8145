//! Validated numeric text fields for the export dimension inputs.
//!
//! Policy: while typing, an empty field is tolerated; anything non-numeric or
//! out of bounds is replaced with the last accepted value and the field
//! shakes. Committing (blur / Enter) an empty field restores the last
//! accepted value, so a field is never left empty once editing ends.

/// How many progress ticks a shake stays visible after a rejected edit.
const SHAKE_TICKS: u8 = 4;

/// Transient rejected-input affordance, expired by the progress tick.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Shake {
    remaining: u8,
}

impl Shake {
    pub fn trigger(&mut self) {
        self.remaining = SHAKE_TICKS;
    }

    pub fn tick(&mut self) {
        self.remaining = self.remaining.saturating_sub(1);
    }

    pub fn is_active(self) -> bool {
        self.remaining > 0
    }
}

/// A text field constrained to integers in a caller-supplied range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumericField {
    value: String,
    last_valid: u32,
    shake: Shake,
}

impl NumericField {
    /// Seed the field with a known-good value.
    pub fn seeded(value: u32) -> Self {
        Self {
            value: value.to_string(),
            last_valid: value,
            shake: Shake::default(),
        }
    }

    pub fn text(&self) -> &str {
        &self.value
    }

    pub fn last_valid(&self) -> u32 {
        self.last_valid
    }

    pub fn shaking(&self) -> bool {
        self.shake.is_active()
    }

    pub fn tick(&mut self) {
        self.shake.tick();
    }

    /// Apply a typed edit. Returns the accepted numeric value, if any.
    ///
    /// An empty string is accepted as-is (the user may be mid-edit) but does
    /// not advance `last_valid`. Invalid input reverts to the last accepted
    /// value and triggers one shake.
    pub fn edit(&mut self, text: &str, min: u32, max: u32) -> Option<u32> {
        if text.is_empty() {
            self.value.clear();
            return None;
        }

        match text.parse::<u32>() {
            Ok(n) if (min..=max).contains(&n) => {
                self.value = text.to_string();
                self.last_valid = n;
                Some(n)
            }
            _ => {
                self.value = self.last_valid.to_string();
                self.shake.trigger();
                None
            }
        }
    }

    /// Write a derived value (the aspect-ratio counterpart of an edit on the
    /// paired field). Bypasses validation; callers only pass values computed
    /// from the baseline.
    pub fn set_derived(&mut self, value: u32) {
        self.value = value.to_string();
        self.last_valid = value;
    }

    /// End-of-edit commit. An empty field restores the last valid value and
    /// shakes.
    pub fn commit(&mut self) {
        if self.value.is_empty() {
            self.value = self.last_valid.to_string();
            self.shake.trigger();
        }
    }
}
