//! CODE128 symbol encoding.
//!
//! Turns text into the sequence of symbol values (start code, data,
//! checksum) and then into a run of bar/space modules. Code sets are chosen
//! automatically: Code C packs digit pairs, Code B covers printable ASCII,
//! Code A covers control characters.

use super::error::{BarcodeError, BarcodeResult};

/// Bar/space widths for symbol values 0..=105. Every pattern starts with a
/// bar and spans 11 modules.
const PATTERNS: [&[u8; 6]; 106] = [
    b"212222", b"222122", b"222221", b"121223", b"121322", b"131222", b"122213", b"122312",
    b"132212", b"221213", b"221312", b"231212", b"112232", b"122132", b"122231", b"113222",
    b"123122", b"123221", b"223211", b"221132", b"221231", b"213212", b"223112", b"312131",
    b"311222", b"321122", b"321221", b"312212", b"322112", b"322211", b"212123", b"212321",
    b"232121", b"111323", b"131123", b"131321", b"112313", b"132113", b"132311", b"211313",
    b"231113", b"231311", b"112133", b"112331", b"132131", b"113123", b"113321", b"133121",
    b"313121", b"211331", b"231131", b"213113", b"213311", b"213131", b"311123", b"311321",
    b"331121", b"312113", b"312311", b"332111", b"314111", b"221411", b"431111", b"111224",
    b"111422", b"121124", b"121421", b"141122", b"141221", b"112214", b"112412", b"122114",
    b"122411", b"142112", b"142211", b"241211", b"221114", b"413111", b"241112", b"134111",
    b"111242", b"121142", b"121241", b"114212", b"124112", b"124211", b"411212", b"421112",
    b"421211", b"212141", b"214121", b"412121", b"111143", b"111341", b"131141", b"114113",
    b"114311", b"411113", b"411311", b"113141", b"114131", b"311141", b"411131", b"211412",
    b"211214", b"211232",
];

/// Stop pattern including the final termination bar (13 modules)
const STOP_PATTERN: &[u8; 7] = b"2331112";

const CODE_C: u8 = 99;
const CODE_B: u8 = 100;
const CODE_A: u8 = 101;
const START_A: u8 = 103;
const START_B: u8 = 104;
const START_C: u8 = 105;

const CHECKSUM_MODULUS: u32 = 103;

/// Modules per data/start/checksum symbol
pub const SYMBOL_MODULES: usize = 11;

/// Modules in the stop pattern
pub const STOP_MODULES: usize = 13;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeSet {
    A,
    B,
    C,
}

impl CodeSet {
    fn start_value(self) -> u8 {
        match self {
            CodeSet::A => START_A,
            CodeSet::B => START_B,
            CodeSet::C => START_C,
        }
    }

    fn switch_value(self) -> u8 {
        match self {
            CodeSet::A => CODE_A,
            CodeSet::B => CODE_B,
            CodeSet::C => CODE_C,
        }
    }

    /// Set for a single non-pair character
    fn for_byte(b: u8) -> Self {
        if b < 32 { CodeSet::A } else { CodeSet::B }
    }
}

/// An encoded CODE128 symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Code128 {
    /// Start value followed by data values (no checksum, no stop)
    values: Vec<u8>,
}

impl Code128 {
    /// Encode text, choosing code sets automatically.
    pub fn encode(data: &str) -> BarcodeResult<Self> {
        if data.is_empty() {
            return Err(BarcodeError::Empty);
        }
        if let Some((position, ch)) = data.chars().enumerate().find(|(_, c)| !c.is_ascii()) {
            return Err(BarcodeError::UnsupportedCharacter { ch, position });
        }

        let bytes = data.as_bytes();
        let n = bytes.len();
        let leading_digits = digit_run(bytes, 0);

        let mut set = if leading_digits >= 4 || (leading_digits == n && n % 2 == 0) {
            CodeSet::C
        } else {
            CodeSet::for_byte(bytes[0])
        };

        let mut values = vec![set.start_value()];
        let mut i = 0;

        while i < n {
            match set {
                CodeSet::C => {
                    if digit_run(bytes, i) >= 2 {
                        values.push((bytes[i] - b'0') * 10 + (bytes[i + 1] - b'0'));
                        i += 2;
                    } else {
                        set = CodeSet::for_byte(bytes[i]);
                        values.push(set.switch_value());
                    }
                }
                CodeSet::A | CodeSet::B => {
                    let run = digit_run(bytes, i);
                    if run >= 6 || (run >= 4 && i + run == n) {
                        if run % 2 == 1 {
                            values.push(char_value(set, bytes[i]));
                            i += 1;
                        }
                        set = CodeSet::C;
                        values.push(CODE_C);
                        continue;
                    }

                    let b = bytes[i];
                    if set == CodeSet::B && b < 32 {
                        set = CodeSet::A;
                        values.push(CODE_A);
                    } else if set == CodeSet::A && b >= 96 {
                        set = CodeSet::B;
                        values.push(CODE_B);
                    }
                    values.push(char_value(set, b));
                    i += 1;
                }
            }
        }

        Ok(Self { values })
    }

    /// Start and data values, without checksum
    pub fn values(&self) -> &[u8] {
        &self.values
    }

    /// The code set the symbol starts in
    pub fn start_set(&self) -> CodeSet {
        match self.values[0] {
            START_A => CodeSet::A,
            START_C => CodeSet::C,
            _ => CodeSet::B,
        }
    }

    /// Modulo-103 weighted checksum
    pub fn checksum(&self) -> u8 {
        let sum: u32 = self
            .values
            .iter()
            .enumerate()
            .map(|(i, &v)| u32::from(v) * (i.max(1) as u32))
            .sum();
        (sum % CHECKSUM_MODULUS) as u8
    }

    /// Number of modules in the full symbol, quiet zones excluded
    pub fn module_count(&self) -> usize {
        (self.values.len() + 1) * SYMBOL_MODULES + STOP_MODULES
    }

    /// Expand to modules; `true` is a bar, `false` a space.
    pub fn modules(&self) -> Vec<bool> {
        let mut modules = Vec::with_capacity(self.module_count());
        let checksum = self.checksum();

        for &value in self.values.iter().chain(std::iter::once(&checksum)) {
            push_pattern(&mut modules, PATTERNS[usize::from(value)]);
        }
        push_pattern(&mut modules, STOP_PATTERN);
        modules
    }
}

fn push_pattern(modules: &mut Vec<bool>, widths: &[u8]) {
    for (i, w) in widths.iter().enumerate() {
        let is_bar = i % 2 == 0;
        modules.extend(std::iter::repeat_n(is_bar, usize::from(w - b'0')));
    }
}

/// Length of the run of ASCII digits starting at `start`
fn digit_run(bytes: &[u8], start: usize) -> usize {
    bytes[start..].iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Symbol value of a character in code set A or B
fn char_value(set: CodeSet, b: u8) -> u8 {
    match set {
        CodeSet::A if b < 32 => b + 64,
        _ => b - 32,
    }
}
