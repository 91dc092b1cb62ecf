//! Default precision per scope (`precision mediump float;`).

use rustc_hash::FxHashMap;

use essl_ir::{BasicType, Precision};

/// One frame per table level; inner frames override outer ones.
#[derive(Debug, Default)]
pub(super) struct PrecisionStack {
    frames: Vec<FxHashMap<BasicType, Precision>>,
}

impl PrecisionStack {
    pub(super) fn push(&mut self) {
        self.frames.push(FxHashMap::default());
    }

    pub(super) fn pop(&mut self) {
        self.frames.pop();
    }

    /// Set the default for `basic` in the innermost frame.
    pub(super) fn set(&mut self, basic: BasicType, precision: Precision) {
        if let Some(frame) = self.frames.last_mut() {
            frame.insert(basic, precision);
        }
    }

    /// Innermost default for `basic`. `UInt` follows `Int`; kinds other than
    /// `Float` and `Int` never have one.
    pub(super) fn get(&self, basic: BasicType) -> Precision {
        let basic = match basic {
            BasicType::UInt => BasicType::Int,
            other => other,
        };
        if !matches!(basic, BasicType::Float | BasicType::Int) {
            return Precision::Undefined;
        }
        self.frames
            .iter()
            .rev()
            .find_map(|frame| frame.get(&basic).copied())
            .unwrap_or(Precision::Undefined)
    }
}
