//! Stand-in attribute compiler for the standalone server.
//!
//! Understands descriptors of the form `"<Stat>: <+|-><amount>[%]"`, the
//! syntax used by the bundled example sets. Anything else is logged and
//! dropped.
use core::fmt;

use armorset_core::AttributeDescriptor;
use armorset_runtime::AttributeCompiler;

/// One compiled attribute effect.
#[derive(Clone, Debug, PartialEq)]
pub struct StatModifier {
    pub stat: String,
    pub amount: f64,
    pub percent: bool,
}

impl fmt::Display for StatModifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:+}", self.stat, self.amount)?;
        if self.percent {
            f.write_str("%")?;
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct StatCompiler;

impl StatCompiler {
    pub fn parse(descriptor: &str) -> Option<StatModifier> {
        let (stat, value) = descriptor.split_once(':')?;
        let stat = stat.trim();
        let value = value.trim();
        if stat.is_empty() {
            return None;
        }

        let (number, percent) = match value.strip_suffix('%') {
            Some(number) => (number, true),
            None => (value, false),
        };
        let amount = number.trim().parse().ok()?;

        Some(StatModifier {
            stat: stat.to_owned(),
            amount,
            percent,
        })
    }
}

impl AttributeCompiler for StatCompiler {
    type Effect = StatModifier;

    fn compile(&self, descriptors: &[AttributeDescriptor]) -> Vec<StatModifier> {
        descriptors
            .iter()
            .filter_map(|descriptor| {
                let parsed = Self::parse(descriptor.as_str());
                if parsed.is_none() {
                    tracing::warn!(
                        target: "armorset::compiler",
                        %descriptor,
                        "Unrecognized attribute descriptor"
                    );
                }
                parsed
            })
            .collect()
    }
}
