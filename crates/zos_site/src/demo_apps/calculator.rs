//! Immediate-execution calculator used by the demo Calculator window.

const MAX_ENTRY_DIGITS: usize = 12;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub(crate) fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "−",
            Self::Multiply => "×",
            Self::Divide => "÷",
        }
    }

    fn apply(self, lhs: f64, rhs: f64) -> Result<f64, &'static str> {
        let value = match self {
            Self::Add => lhs + rhs,
            Self::Subtract => lhs - rhs,
            Self::Multiply => lhs * rhs,
            Self::Divide if rhs == 0.0 => return Err("Cannot divide by zero"),
            Self::Divide => lhs / rhs,
        };
        if value.is_finite() {
            Ok(value)
        } else {
            Err("Overflow")
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Key {
    Digit(char),
    Decimal,
    Operator(Operator),
    Equals,
    Clear,
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Calculator {
    entry: String,
    accumulator: Option<f64>,
    pending: Option<Operator>,
    fresh_entry: bool,
    error: Option<&'static str>,
}

impl Default for Calculator {
    fn default() -> Self {
        Self {
            entry: "0".to_string(),
            accumulator: None,
            pending: None,
            fresh_entry: false,
            error: None,
        }
    }
}

impl Calculator {
    pub(crate) fn press(&mut self, key: Key) {
        if self.error.is_some() && key != Key::Clear {
            return;
        }
        match key {
            Key::Digit(digit) => self.push_digit(digit),
            Key::Decimal => self.push_decimal(),
            Key::Operator(op) => self.set_operator(op),
            Key::Equals => self.equals(),
            Key::Clear => *self = Self::default(),
        }
    }

    pub(crate) fn display(&self) -> String {
        self.error
            .map(str::to_string)
            .unwrap_or_else(|| self.entry.clone())
    }

    pub(crate) fn pending_symbol(&self) -> Option<&'static str> {
        self.pending.map(Operator::symbol)
    }

    fn entry_value(&self) -> f64 {
        self.entry.parse().unwrap_or_default()
    }

    fn push_digit(&mut self, digit: char) {
        if !digit.is_ascii_digit() {
            return;
        }
        if self.fresh_entry {
            self.entry = "0".to_string();
            self.fresh_entry = false;
        }
        let digits = self.entry.chars().filter(char::is_ascii_digit).count();
        if digits >= MAX_ENTRY_DIGITS {
            return;
        }
        if self.entry == "0" {
            self.entry = digit.to_string();
        } else {
            self.entry.push(digit);
        }
    }

    fn push_decimal(&mut self) {
        if self.fresh_entry {
            self.entry = "0".to_string();
            self.fresh_entry = false;
        }
        if !self.entry.contains('.') {
            self.entry.push('.');
        }
    }

    fn set_operator(&mut self, op: Operator) {
        // Pressing a second operator before any digits only swaps the operator.
        if !(self.fresh_entry && self.pending.is_some()) {
            self.equals();
            if self.error.is_some() {
                return;
            }
            self.accumulator = Some(self.entry_value());
        }
        self.pending = Some(op);
        self.fresh_entry = true;
    }

    fn equals(&mut self) {
        let (Some(lhs), Some(op)) = (self.accumulator, self.pending.take()) else {
            return;
        };
        match op.apply(lhs, self.entry_value()) {
            Ok(value) => {
                self.entry = format_number(value);
                self.accumulator = None;
                self.fresh_entry = true;
            }
            Err(message) => self.error = Some(message),
        }
    }
}

pub(crate) fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        return format!("{value:.0}");
    }
    let text = format!("{value:.10}");
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}
