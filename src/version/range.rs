//! npm range expressions
//!
//! Supports the node-semver range grammar used in package.json:
//! - `1.2.3`, `=1.2.3`, `v1.2.3` - exact match
//! - `^1.2.3` - compatible with version (>=1.2.3 <2.0.0-0)
//! - `~1.2.3`, `~>1.2.3` - approximately equivalent (>=1.2.3 <1.3.0-0)
//! - `>=1.2.3`, `>1.2.3`, `<=1.2.3`, `<1.2.3` - comparison operators
//! - `1.2.x`, `1.x`, `1.2`, `1`, `*`, empty string - wildcards and partial versions
//!   (anything after a wildcard is ignored, so `1.x.3` is `1.x`)
//! - `1.0.0 - 2.0.0` - hyphen range
//! - `>=1.0.0 <2.0.0` - space-separated, all must satisfy
//! - `^1.0.0 || ^2.0.0` - any must satisfy
//!
//! Every form is lowered to plain comparators so that satisfaction and the
//! pre-release rule are checked in one place.

use semver::{BuildMetadata, Prerelease, Version};

use crate::version::error::VersionError;

/// Operators recognised in front of a version, longest first
const OPERATORS: [&str; 8] = [">=", "<=", "~>", ">", "<", "=", "^", "~"];

/// A parsed range: alternatives separated by `||`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeSpec {
    sets: Vec<ComparatorSet>,
}

impl RangeSpec {
    /// Parse a range expression
    pub fn parse(spec: &str) -> Result<Self, VersionError> {
        spec.split("||")
            .map(ComparatorSet::parse)
            .collect::<Option<Vec<_>>>()
            .map(|sets| Self { sets })
            .ok_or_else(|| VersionError::InvalidRange(spec.to_string()))
    }

    /// Check if a version satisfies any alternative of this range
    pub fn satisfies(&self, version: &Version) -> bool {
        self.sets.iter().any(|set| set.satisfies(version))
    }
}

/// Space-separated comparators that must all hold
#[derive(Debug, Clone, PartialEq, Eq)]
struct ComparatorSet {
    comparators: Vec<Comparator>,
}

impl ComparatorSet {
    fn parse(set: &str) -> Option<Self> {
        let tokens: Vec<&str> = set.split_whitespace().collect();

        // A hyphen range must stand alone in its alternative
        if let [from, "-", to] = tokens.as_slice() {
            let mut comparators = Partial::parse(from)?.at_least();
            comparators.extend(Partial::parse(to)?.at_most()?);
            return Some(Self { comparators });
        }

        let mut comparators = Vec::new();
        let mut tokens = tokens.into_iter();
        while let Some(token) = tokens.next() {
            // ">= 1.2.3" and "> =1.2.3" spread one comparator over several tokens
            let mut comparator = token.to_string();
            while OPERATORS.contains(&comparator.as_str()) {
                comparator.push_str(tokens.next()?);
            }

            let (operator, operand) = split_operator(&comparator);
            comparators.extend(expand(operator, operand)?);
        }

        Some(Self { comparators })
    }

    fn satisfies(&self, version: &Version) -> bool {
        if !self.comparators.iter().all(|c| c.matches(version)) {
            return false;
        }

        if version.pre.is_empty() {
            return true;
        }

        // A pre-release only matches when some comparator opts into
        // pre-releases of the same major.minor.patch
        self.comparators.iter().any(|c| {
            !c.version.pre.is_empty()
                && c.version.major == version.major
                && c.version.minor == version.minor
                && c.version.patch == version.patch
        })
    }
}

fn split_operator(token: &str) -> (&str, &str) {
    OPERATORS
        .iter()
        .find_map(|op| token.strip_prefix(op).map(|rest| (*op, rest)))
        .unwrap_or(("", token))
}

fn expand(operator: &str, operand: &str) -> Option<Vec<Comparator>> {
    let partial = Partial::parse(operand)?;

    match operator {
        "" | "=" => partial.exact(),
        "^" => partial.caret(),
        "~" | "~>" => partial.tilde(),
        ">" => partial.greater_than(),
        ">=" => Some(partial.at_least()),
        "<" => partial.less_than(),
        "<=" => partial.at_most(),
        _ => None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Op {
    Eq,
    Gt,
    Gte,
    Lt,
    Lte,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Comparator {
    op: Op,
    version: Version,
}

impl Comparator {
    fn new(op: Op, version: Version) -> Self {
        Self { op, version }
    }

    fn matches(&self, version: &Version) -> bool {
        match self.op {
            Op::Eq => *version == self.version,
            Op::Gt => *version > self.version,
            Op::Gte => *version >= self.version,
            Op::Lt => *version < self.version,
            Op::Lte => *version <= self.version,
        }
    }
}

/// A version that may have wildcard components
#[derive(Debug, Clone, PartialEq, Eq)]
enum Partial {
    /// `*`, `x`, `X`
    Any,
    /// `1`, `1.x`, `1.x.x`
    Major(u64),
    /// `1.2`, `1.2.x`
    Minor(u64, u64),
    /// `1.2.3`, `1.2.3-beta.1`
    Full(Version),
}

impl Partial {
    fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        let input = input.strip_prefix('v').unwrap_or(input);

        let core_end = input.find(['-', '+']).unwrap_or(input.len());
        let (core, suffix) = input.split_at(core_end);

        let parts = core
            .split('.')
            .map(parse_part)
            .collect::<Option<Vec<_>>>()?;

        // Everything after a wildcard is a wildcard: 1.x.3 means 1.x
        let mut wildcard = false;
        let parts: Vec<Option<u64>> = parts
            .into_iter()
            .map(|part| {
                wildcard |= part.is_none();
                part.filter(|_| !wildcard)
            })
            .collect();

        match parts.as_slice() {
            [Some(_), Some(_), Some(_)] => {
                let mut version = Version::parse(input).ok()?;
                version.build = BuildMetadata::EMPTY;
                Some(Partial::Full(version))
            }
            // Pre-release and build tags need a full version
            _ if !suffix.is_empty() => None,
            [None] | [None, None] | [None, None, None] => Some(Partial::Any),
            [Some(major)] | [Some(major), None] | [Some(major), None, None] => {
                Some(Partial::Major(*major))
            }
            [Some(major), Some(minor)] | [Some(major), Some(minor), None] => {
                Some(Partial::Minor(*major, *minor))
            }
            _ => None,
        }
    }

    /// Plain or `=`: 1.2.3 is exact, 1.2 means 1.2.x
    fn exact(self) -> Option<Vec<Comparator>> {
        match self {
            Partial::Full(v) => Some(vec![Comparator::new(Op::Eq, v)]),
            other => other.tilde(),
        }
    }

    fn caret(self) -> Option<Vec<Comparator>> {
        let upper = match &self {
            Partial::Any => return Some(Vec::new()),
            Partial::Major(major) => floor(major.checked_add(1)?, 0, 0)?,
            Partial::Minor(0, minor) => floor(0, minor.checked_add(1)?, 0)?,
            Partial::Minor(major, _) => floor(major.checked_add(1)?, 0, 0)?,
            Partial::Full(v) if v.major > 0 => floor(v.major.checked_add(1)?, 0, 0)?,
            Partial::Full(v) if v.minor > 0 => floor(0, v.minor.checked_add(1)?, 0)?,
            Partial::Full(v) => floor(0, 0, v.patch.checked_add(1)?)?,
        };
        Some(vec![
            Comparator::new(Op::Gte, self.lowest()),
            Comparator::new(Op::Lt, upper),
        ])
    }

    fn tilde(self) -> Option<Vec<Comparator>> {
        let upper = match &self {
            Partial::Any => return Some(Vec::new()),
            Partial::Major(major) => floor(major.checked_add(1)?, 0, 0)?,
            Partial::Minor(major, minor) => floor(*major, minor.checked_add(1)?, 0)?,
            Partial::Full(v) => floor(v.major, v.minor.checked_add(1)?, 0)?,
        };
        Some(vec![
            Comparator::new(Op::Gte, self.lowest()),
            Comparator::new(Op::Lt, upper),
        ])
    }

    fn greater_than(self) -> Option<Vec<Comparator>> {
        let comparator = match self {
            Partial::Any => Comparator::new(Op::Lt, floor(0, 0, 0)?),
            Partial::Major(major) => {
                Comparator::new(Op::Gte, Version::new(major.checked_add(1)?, 0, 0))
            }
            Partial::Minor(major, minor) => {
                Comparator::new(Op::Gte, Version::new(major, minor.checked_add(1)?, 0))
            }
            Partial::Full(v) => Comparator::new(Op::Gt, v),
        };
        Some(vec![comparator])
    }

    fn at_least(self) -> Vec<Comparator> {
        match self {
            Partial::Any => Vec::new(),
            other => vec![Comparator::new(Op::Gte, other.lowest())],
        }
    }

    fn less_than(self) -> Option<Vec<Comparator>> {
        let comparator = match self {
            Partial::Any => Comparator::new(Op::Lt, floor(0, 0, 0)?),
            Partial::Major(major) => Comparator::new(Op::Lt, floor(major, 0, 0)?),
            Partial::Minor(major, minor) => Comparator::new(Op::Lt, floor(major, minor, 0)?),
            Partial::Full(v) => Comparator::new(Op::Lt, v),
        };
        Some(vec![comparator])
    }

    fn at_most(self) -> Option<Vec<Comparator>> {
        match self {
            Partial::Any => Some(Vec::new()),
            Partial::Full(v) => Some(vec![Comparator::new(Op::Lte, v)]),
            Partial::Major(major) => Some(vec![Comparator::new(
                Op::Lt,
                floor(major.checked_add(1)?, 0, 0)?,
            )]),
            Partial::Minor(major, minor) => Some(vec![Comparator::new(
                Op::Lt,
                floor(major, minor.checked_add(1)?, 0)?,
            )]),
        }
    }

    /// Smallest release version covered, with missing components as zero
    fn lowest(&self) -> Version {
        match self {
            Partial::Any => Version::new(0, 0, 0),
            Partial::Major(major) => Version::new(*major, 0, 0),
            Partial::Minor(major, minor) => Version::new(*major, *minor, 0),
            Partial::Full(v) => v.clone(),
        }
    }
}

/// Parse one dot-separated component: `Some(None)` is a wildcard
fn parse_part(part: &str) -> Option<Option<u64>> {
    match part {
        "x" | "X" | "*" => Some(None),
        "0" => Some(Some(0)),
        _ if !part.is_empty()
            && !part.starts_with('0')
            && part.bytes().all(|b| b.is_ascii_digit()) =>
        {
            part.parse().ok().map(Some)
        }
        _ => None,
    }
}

/// The lowest possible version of a major.minor.patch tuple (`x.y.z-0`)
fn floor(major: u64, minor: u64, patch: u64) -> Option<Version> {
    Some(Version {
        major,
        minor,
        patch,
        pre: Prerelease::new("0").ok()?,
        build: BuildMetadata::EMPTY,
    })
}
