//! The `TextComponent` value type and its host bindings.
//!
//! `TextComponent` is the demo data holder: a mutable text field, a
//! read-only text field fixed at construction, and a public counter. The
//! module-level [`bind`] function registers it, together with the demo
//! [`Choice`] enum, under the names the host environment sees.

use std::io::{self, Write};

use num_enum::{IntoPrimitive, TryFromPrimitive};

use crate::entries::{ClassDef, EnumDef};
use crate::error::RegistrationError;
use crate::module::ModuleHost;
use crate::value::Value;

/// Demo data holder exposed to the host environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextComponent {
    text: String,
    ro_text: &'static str,
    /// Public counter. Freely readable and writable by any holder of the
    /// instance; no invariant is enforced.
    pub counter: i32,
}

impl TextComponent {
    /// Value of the read-only text field, identical for every instance.
    pub const READ_ONLY_TEXT: &'static str = "can't touch this";

    /// The line emitted by [`greet`](TextComponent::greet), without the
    /// trailing newline.
    pub const GREETING: &'static str = "Hello World";

    /// Empty text, counter zero.
    ///
    /// The original left the counter uninitialized when omitted from
    /// construction; here it defaults to `0`.
    pub fn new() -> Self {
        Self::with_text_and_counter("", 0)
    }

    /// Given text, counter zero.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self::with_text_and_counter(text, 0)
    }

    /// Given text and counter.
    pub fn with_text_and_counter(text: impl Into<String>, counter: i32) -> Self {
        Self {
            text: text.into(),
            ro_text: Self::READ_ONLY_TEXT,
            counter,
        }
    }

    /// Current value of the mutable text field.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the mutable text field. Unconditional, no validation.
    pub fn set_text(&mut self, value: impl Into<String>) {
        self.text = value.into();
    }

    /// The read-only text field. Fixed at construction; there is no way to
    /// change it afterwards.
    pub fn read_only_text(&self) -> &'static str {
        self.ro_text
    }

    /// Write the fixed greeting line to stdout. Fire-and-forget.
    pub fn greet(&self) {
        let _ = self.greet_to(&mut io::stdout());
    }

    /// Write the fixed greeting line to an arbitrary sink.
    pub fn greet_to<W: Write>(&self, sink: &mut W) -> io::Result<()> {
        writeln!(sink, "{}", Self::GREETING)
    }
}

impl Default for TextComponent {
    fn default() -> Self {
        Self::new()
    }
}

/// Demo enum registered alongside the component (`MYENUM` upstream).
#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoPrimitive, TryFromPrimitive)]
#[repr(i32)]
pub enum Choice {
    OptionOne = 0,
    OptionTwo = 1,
    All = 2,
}

/// Register [`TextComponent`] and [`Choice`] with the host module.
pub fn bind(host: &mut dyn ModuleHost) -> Result<(), RegistrationError> {
    host.register_class(class_def())?;
    host.register_enum(enum_def())?;
    Ok(())
}

fn class_def() -> ClassDef {
    ClassDef::new("TextComponent")
        .with_constructor(0, |_args| Ok(TextComponent::new()))
        .with_constructor(1, |args| Ok(TextComponent::with_text(args[0].as_str()?)))
        .with_constructor(2, |args| {
            Ok(TextComponent::with_text_and_counter(
                args[0].as_str()?,
                args[1].as_i32()?,
            ))
        })
        .with_method("getText", 0, |this: &mut TextComponent, _args| {
            Ok(Value::Str(this.text().to_owned()))
        })
        .with_method("setText", 1, |this: &mut TextComponent, args| {
            this.set_text(args[0].as_str()?);
            Ok(Value::Unit)
        })
        .with_method("getROText", 0, |this: &mut TextComponent, _args| {
            Ok(Value::Str(this.read_only_text().to_owned()))
        })
        .with_method("diagnosticGreet", 0, |this: &mut TextComponent, _args| {
            this.greet();
            Ok(Value::Unit)
        })
        .with_readonly_property("roText", |this: &TextComponent| {
            Value::Str(this.read_only_text().to_owned())
        })
        .with_property(
            "counter",
            |this: &TextComponent| Value::from(this.counter),
            |this: &mut TextComponent, value| {
                this.counter = value.as_i32()?;
                Ok(())
            },
        )
}

fn enum_def() -> EnumDef {
    EnumDef::new("MYENUM")
        .with_variant("OPTION_1", Choice::OptionOne)
        .with_variant("OPTION_2", Choice::OptionTwo)
        .with_variant("ALL", Choice::All)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_construction_is_empty_text_zero_counter() {
        let c = TextComponent::new();
        assert_eq!(c.text(), "");
        assert_eq!(c.counter, 0);
        assert_eq!(TextComponent::default(), c);
    }

    #[test]
    fn text_constructor_stores_the_text() {
        let c = TextComponent::with_text("hello");
        assert_eq!(c.text(), "hello");
        assert_eq!(c.counter, 0);
    }

    #[test]
    fn full_constructor_stores_text_and_counter() {
        let c = TextComponent::with_text_and_counter("hello", 42);
        assert_eq!(c.text(), "hello");
        assert_eq!(c.counter, 42);
    }

    #[test]
    fn read_only_text_is_the_constant_for_every_form() {
        for c in [
            TextComponent::new(),
            TextComponent::with_text("a"),
            TextComponent::with_text_and_counter("b", 1),
        ] {
            assert_eq!(c.read_only_text(), TextComponent::READ_ONLY_TEXT);
            assert_eq!(c.read_only_text(), "can't touch this");
        }
    }

    #[test]
    fn set_text_last_write_wins() {
        let mut c = TextComponent::new();
        c.set_text("first");
        c.set_text("second");
        assert_eq!(c.text(), "second");
    }

    #[test]
    fn counter_is_freely_writable() {
        let mut c = TextComponent::new();
        c.counter = -5;
        assert_eq!(c.counter, -5);
    }

    #[test]
    fn greet_emits_one_line_per_call_in_order() {
        let c = TextComponent::new();
        let mut out = Vec::new();
        c.greet_to(&mut out).unwrap();
        c.greet_to(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Hello World\nHello World\n");
    }

    #[test]
    fn choice_round_trips_through_i32() {
        for choice in [Choice::OptionOne, Choice::OptionTwo, Choice::All] {
            let raw: i32 = choice.into();
            assert_eq!(Choice::try_from(raw), Ok(choice));
        }
        assert!(Choice::try_from(3).is_err());
    }

    #[test]
    fn enum_def_matches_the_declared_values() {
        let def = enum_def();
        assert_eq!(def.name(), "MYENUM");
        assert_eq!(def.value_of("OPTION_1"), Some(0));
        assert_eq!(def.value_of("OPTION_2"), Some(1));
        assert_eq!(def.value_of("ALL"), Some(2));
    }
}
