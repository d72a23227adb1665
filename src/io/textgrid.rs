/*! Praat TextGrid reading.

Both the long (`key = value`) and short (values only) text formats are supported.
They carry the same values in the same order, so the file is read as a stream of values
(quoted strings, numbers and `<flags>`), skipping keys and item headers.

Files are expected in UTF-8 (with or without BOM) or UTF-16 with a BOM,
which is what Praat writes when labels are not ASCII.
!*/
use std::path::Path;

use log::debug;

use crate::error::Error;
use crate::segment::Interval;

/// A single timestamped mark of a point tier.
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    pub time: f64,
    pub mark: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TierKind {
    Intervals(Vec<Interval>),
    Points(Vec<Point>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tier {
    name: String,
    kind: TierKind,
}

impl Tier {
    /// Get a reference to the tier's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get a reference to the tier's content.
    pub fn kind(&self) -> &TierKind {
        &self.kind
    }

    /// Returns the tier's intervals, or [None] if this is a point tier.
    pub fn intervals(&self) -> Option<&[Interval]> {
        match &self.kind {
            TierKind::Intervals(intervals) => Some(intervals),
            TierKind::Points(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextGrid {
    xmin: f64,
    xmax: f64,
    tiers: Vec<Tier>,
}

impl TextGrid {
    /// Read and parse a TextGrid file.
    pub fn from_path(path: &Path) -> Result<Self, Error> {
        debug!("reading TextGrid {:?}", path);
        let bytes = std::fs::read(path)?;
        let content = decode(&bytes)?;
        content.parse()
    }

    pub fn xmin(&self) -> f64 {
        self.xmin
    }

    pub fn xmax(&self) -> f64 {
        self.xmax
    }

    /// Get a reference to the TextGrid's tiers.
    pub fn tiers(&self) -> &[Tier] {
        &self.tiers
    }

    /// Get a tier by name.
    pub fn tier(&self, name: &str) -> Option<&Tier> {
        self.tiers.iter().find(|t| t.name == name)
    }

    /// Intervals of the first tier, which must be an interval tier.
    pub fn first_tier_intervals(&self) -> Result<&[Interval], Error> {
        let tier = self
            .tiers
            .first()
            .ok_or_else(|| Error::TextGrid("no tiers".to_string()))?;
        tier.intervals().ok_or_else(|| {
            Error::TextGrid(format!("first tier ({}) is not an interval tier", tier.name))
        })
    }
}

impl std::str::FromStr for TextGrid {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut values = Values::new(s);

        let file_type = values.string()?;
        let object_class = values.string()?;
        // short format files may announce themselves as "ooTextFile short"
        let known_type = file_type == "ooTextFile" || file_type == "ooTextFile short";
        if !known_type || object_class != "TextGrid" {
            return Err(Error::TextGrid(format!(
                "unexpected header ({}, {})",
                file_type, object_class
            )));
        }

        let xmin = values.number()?;
        let xmax = values.number()?;

        let nb_tiers = match values.flag()?.as_str() {
            "exists" => values.count()?,
            "absent" => 0,
            other => return Err(Error::TextGrid(format!("unknown tiers flag <{}>", other))),
        };

        let mut tiers = Vec::with_capacity(nb_tiers);
        for _ in 0..nb_tiers {
            tiers.push(values.tier()?);
        }

        Ok(TextGrid { xmin, xmax, tiers })
    }
}

/// Decode file content, honoring byte order marks.
fn decode(bytes: &[u8]) -> Result<String, Error> {
    let utf16 = |be: bool| -> Result<String, Error> {
        if (bytes.len() - 2) % 2 != 0 {
            return Err(Error::TextGrid(
                "truncated UTF-16 content (odd number of bytes)".to_string(),
            ));
        }
        let units: Vec<u16> = bytes[2..]
            .chunks_exact(2)
            .map(|c| {
                if be {
                    u16::from_be_bytes([c[0], c[1]])
                } else {
                    u16::from_le_bytes([c[0], c[1]])
                }
            })
            .collect();
        String::from_utf16(&units).map_err(|e| Error::TextGrid(e.to_string()))
    };

    match bytes {
        [0xFE, 0xFF, ..] => utf16(true),
        [0xFF, 0xFE, ..] => utf16(false),
        [0xEF, 0xBB, 0xBF, rest @ ..] => {
            String::from_utf8(rest.to_vec()).map_err(|e| Error::TextGrid(e.to_string()))
        }
        _ => String::from_utf8(bytes.to_vec()).map_err(|e| Error::TextGrid(e.to_string())),
    }
}

#[derive(Debug, PartialEq)]
enum Value {
    Str(String),
    Num(f64),
    Flag(String),
}

/// Iterates over the values of a TextGrid file, ignoring keys, `=` signs,
/// item headers (`item [1]:`) and `!` comments.
struct Values<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
}

impl<'a> Values<'a> {
    fn new(content: &'a str) -> Self {
        Self {
            chars: content.chars().peekable(),
        }
    }

    fn word(&mut self) -> String {
        let mut w = String::new();
        while let Some(c) = self.chars.peek() {
            if c.is_whitespace() {
                break;
            }
            w.push(*c);
            self.chars.next();
        }
        w
    }

    fn quoted(&mut self) -> Result<String, Error> {
        let mut s = String::new();
        loop {
            match self.chars.next() {
                Some('"') => {
                    // "" is an escaped quote
                    if self.chars.peek() == Some(&'"') {
                        self.chars.next();
                        s.push('"');
                    } else {
                        return Ok(s);
                    }
                }
                Some(c) => s.push(c),
                None => return Err(Error::TextGrid("unterminated string".to_string())),
            }
        }
    }

    fn next_value(&mut self) -> Result<Option<Value>, Error> {
        while let Some(&c) = self.chars.peek() {
            match c {
                c if c.is_whitespace() => {
                    self.chars.next();
                }
                '!' => {
                    for c in self.chars.by_ref() {
                        if c == '\n' {
                            break;
                        }
                    }
                }
                '"' => {
                    self.chars.next();
                    return self.quoted().map(|s| Some(Value::Str(s)));
                }
                '<' => {
                    let w = self.word();
                    let flag = w.trim_start_matches('<').trim_end_matches('>');
                    return Ok(Some(Value::Flag(flag.to_string())));
                }
                c if c.is_ascii_digit() || c == '-' || c == '+' || c == '.' => {
                    let w = self.word();
                    return w
                        .parse()
                        .map(|n| Some(Value::Num(n)))
                        .map_err(|_| Error::TextGrid(format!("invalid number {:?}", w)));
                }
                _ => {
                    // key, `=`, `item [1]:`, `intervals:` ...
                    self.word();
                }
            }
        }
        Ok(None)
    }

    fn expect(&mut self, what: &str) -> Result<Value, Error> {
        self.next_value()?
            .ok_or_else(|| Error::TextGrid(format!("unexpected end of file, expected {}", what)))
    }

    fn string(&mut self) -> Result<String, Error> {
        match self.expect("a string")? {
            Value::Str(s) => Ok(s),
            other => Err(Error::TextGrid(format!("expected a string, got {:?}", other))),
        }
    }

    fn number(&mut self) -> Result<f64, Error> {
        match self.expect("a number")? {
            Value::Num(n) => Ok(n),
            other => Err(Error::TextGrid(format!("expected a number, got {:?}", other))),
        }
    }

    fn flag(&mut self) -> Result<String, Error> {
        match self.expect("a flag")? {
            Value::Flag(f) => Ok(f),
            other => Err(Error::TextGrid(format!("expected a flag, got {:?}", other))),
        }
    }

    fn count(&mut self) -> Result<usize, Error> {
        let n = self.number()?;
        if n < 0.0 || n.fract() != 0.0 {
            return Err(Error::TextGrid(format!("invalid size {}", n)));
        }
        Ok(n as usize)
    }

    fn tier(&mut self) -> Result<Tier, Error> {
        let class = self.string()?;
        let name = self.string()?;
        let _xmin = self.number()?;
        let _xmax = self.number()?;
        let size = self.count()?;

        let kind = match class.as_str() {
            "IntervalTier" => {
                let mut intervals = Vec::with_capacity(size);
                for _ in 0..size {
                    let start = self.number()?;
                    let end = self.number()?;
                    let label = self.string()?;
                    intervals.push(Interval::new(start, end, label));
                }
                TierKind::Intervals(intervals)
            }
            "TextTier" => {
                let mut points = Vec::with_capacity(size);
                for _ in 0..size {
                    let time = self.number()?;
                    let mark = self.string()?;
                    points.push(Point { time, mark });
                }
                TierKind::Points(points)
            }
            other => return Err(Error::TextGrid(format!("unknown tier class {}", other))),
        };

        debug!("read tier {} ({} items)", name, size);
        Ok(Tier { name, kind })
    }
}
