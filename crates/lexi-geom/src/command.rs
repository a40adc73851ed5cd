//! Path commands
//!
//! Guide strokes are stored as a short list of absolute path commands. They
//! come either from an SVG-style `d` string or from a hand-authored point list.

use crate::point::Point;

/// Command tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Move,
    Line,
    Quadratic,
    Cubic,
}

impl CommandKind {
    /// Number of coordinate values one command of this kind consumes
    pub const fn arity(self) -> usize {
        match self {
            CommandKind::Move | CommandKind::Line => 2,
            CommandKind::Quadratic => 4,
            CommandKind::Cubic => 6,
        }
    }

    fn from_letter(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'M' => Some(CommandKind::Move),
            'L' => Some(CommandKind::Line),
            'Q' => Some(CommandKind::Quadratic),
            'C' => Some(CommandKind::Cubic),
            _ => None,
        }
    }

    const fn letter(self) -> char {
        match self {
            CommandKind::Move => 'M',
            CommandKind::Line => 'L',
            CommandKind::Quadratic => 'Q',
            CommandKind::Cubic => 'C',
        }
    }
}

/// Path command with absolute coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    Move(Point),
    Line(Point),
    Quadratic { ctrl: Point, to: Point },
    Cubic { ctrl1: Point, ctrl2: Point, to: Point },
}

impl PathCommand {
    /// Build a command from a flat coordinate tuple of exactly `kind.arity()` values
    pub fn from_coords(kind: CommandKind, c: &[f32]) -> Option<Self> {
        if c.len() != kind.arity() {
            return None;
        }
        let cmd = match kind {
            CommandKind::Move => PathCommand::Move(Point::new(c[0], c[1])),
            CommandKind::Line => PathCommand::Line(Point::new(c[0], c[1])),
            CommandKind::Quadratic => PathCommand::Quadratic {
                ctrl: Point::new(c[0], c[1]),
                to: Point::new(c[2], c[3]),
            },
            CommandKind::Cubic => PathCommand::Cubic {
                ctrl1: Point::new(c[0], c[1]),
                ctrl2: Point::new(c[2], c[3]),
                to: Point::new(c[4], c[5]),
            },
        };
        Some(cmd)
    }

    pub fn kind(&self) -> CommandKind {
        match self {
            PathCommand::Move(_) => CommandKind::Move,
            PathCommand::Line(_) => CommandKind::Line,
            PathCommand::Quadratic { .. } => CommandKind::Quadratic,
            PathCommand::Cubic { .. } => CommandKind::Cubic,
        }
    }

    /// Flat coordinate list in command order
    pub fn coords(&self) -> Vec<f32> {
        self.points().iter().flat_map(|p| [p.x, p.y]).collect()
    }

    /// Control and end points in command order
    pub fn points(&self) -> Vec<Point> {
        match *self {
            PathCommand::Move(p) | PathCommand::Line(p) => vec![p],
            PathCommand::Quadratic { ctrl, to } => vec![ctrl, to],
            PathCommand::Cubic { ctrl1, ctrl2, to } => vec![ctrl1, ctrl2, to],
        }
    }

    /// End point of the command
    pub fn end(&self) -> Point {
        match *self {
            PathCommand::Move(p) | PathCommand::Line(p) => p,
            PathCommand::Quadratic { to, .. } | PathCommand::Cubic { to, .. } => to,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.points().iter().all(Point::is_finite)
    }

    /// Apply a point transform to every coordinate
    pub fn map(&self, f: impl Fn(Point) -> Point) -> PathCommand {
        match *self {
            PathCommand::Move(p) => PathCommand::Move(f(p)),
            PathCommand::Line(p) => PathCommand::Line(f(p)),
            PathCommand::Quadratic { ctrl, to } => PathCommand::Quadratic { ctrl: f(ctrl), to: f(to) },
            PathCommand::Cubic { ctrl1, ctrl2, to } => PathCommand::Cubic {
                ctrl1: f(ctrl1),
                ctrl2: f(ctrl2),
                to: f(to),
            },
        }
    }
}

/// One pen stroke of a letter
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GuideStroke {
    commands: Vec<PathCommand>,
}

impl GuideStroke {
    pub fn new(commands: Vec<PathCommand>) -> Self {
        Self { commands }
    }

    /// Stroke from a point list: the first point moves, every later point draws a line.
    /// Non-finite points are dropped.
    pub fn from_points(points: &[Point]) -> Self {
        let commands = points
            .iter()
            .filter(|p| p.is_finite())
            .enumerate()
            .map(|(i, &p)| if i == 0 { PathCommand::Move(p) } else { PathCommand::Line(p) })
            .collect();
        Self { commands }
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Point the stroke opens with. Only a leading move names one; a stroke that
    /// opens with a draw command starts at an implicit origin.
    pub fn start(&self) -> Option<Point> {
        match self.commands.first()? {
            PathCommand::Move(p) => Some(*p),
            _ => None,
        }
    }
}

/// Parse an SVG-style path string.
///
/// Only `M`, `L`, `Q` and `C` are recognized (either case, always treated as
/// absolute). Numbers following a command are grouped into tuples of the
/// command's arity; extra tuples after `M` become lines. Incomplete trailing
/// tuples, commands with no usable numbers, and non-finite values are dropped.
pub fn parse_path_commands(d: &str) -> GuideStroke {
    let mut commands = Vec::new();
    let mut current: Option<(CommandKind, usize)> = None;

    for (i, c) in d.char_indices() {
        if let Some(kind) = CommandKind::from_letter(c) {
            if let Some((prev, start)) = current.take() {
                push_run(&mut commands, prev, &d[start..i]);
            }
            current = Some((kind, i + c.len_utf8()));
        }
    }
    if let Some((kind, start)) = current {
        push_run(&mut commands, kind, &d[start..]);
    }

    GuideStroke { commands }
}

fn push_run(out: &mut Vec<PathCommand>, kind: CommandKind, run: &str) {
    let numbers: Vec<f32> = scan_numbers(run).into_iter().filter(|n| n.is_finite()).collect();
    for (i, chunk) in numbers.chunks_exact(kind.arity()).enumerate() {
        let kind = if kind == CommandKind::Move && i > 0 { CommandKind::Line } else { kind };
        if let Some(cmd) = PathCommand::from_coords(kind, chunk) {
            out.push(cmd);
        }
    }
}

/// Pull every decimal literal out of a run of text, ignoring anything else
fn scan_numbers(run: &str) -> Vec<f32> {
    let bytes = run.as_bytes();
    let mut out = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        match number_len(&bytes[i..]) {
            Some(len) => {
                if let Ok(n) = run[i..i + len].parse::<f32>() {
                    out.push(n);
                }
                i += len;
            }
            None => i += 1,
        }
    }
    out
}

/// Length of the numeric literal at the start of `b`, if there is one
fn number_len(b: &[u8]) -> Option<usize> {
    let mut i = 0;
    if matches!(b.first(), Some(b'-') | Some(b'+')) {
        i += 1;
    }

    let int_start = i;
    while i < b.len() && b[i].is_ascii_digit() {
        i += 1;
    }
    let mut digits = i - int_start;

    if i < b.len() && b[i] == b'.' {
        let frac_start = i + 1;
        let mut j = frac_start;
        while j < b.len() && b[j].is_ascii_digit() {
            j += 1;
        }
        if j > frac_start {
            digits += j - frac_start;
            i = j;
        } else if digits > 0 {
            // "5." is still a number
            i += 1;
        }
    }

    if digits == 0 {
        return None;
    }

    if i < b.len() && (b[i] == b'e' || b[i] == b'E') {
        let mut j = i + 1;
        if j < b.len() && (b[j] == b'-' || b[j] == b'+') {
            j += 1;
        }
        let exp_start = j;
        while j < b.len() && b[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }

    Some(i)
}

/// Scale every coordinate about the viewbox center.
///
/// A scale of 1, 0, or a non-finite scale leaves the stroke untouched.
pub fn scale_commands(stroke: &GuideStroke, scale: f32, viewbox: f32) -> GuideStroke {
    if scale == 1.0 || scale == 0.0 || !scale.is_finite() {
        return stroke.clone();
    }
    let c = viewbox / 2.0;
    let commands = stroke
        .commands
        .iter()
        .map(|cmd| cmd.map(|p| Point::new(c + (p.x - c) * scale, c + (p.y - c) * scale)))
        .collect();
    GuideStroke { commands }
}

/// Serialize a stroke back into a path string.
///
/// Returns an empty string when any coordinate is not finite.
pub fn commands_to_path(stroke: &GuideStroke) -> String {
    let mut parts = Vec::with_capacity(stroke.len());
    for cmd in &stroke.commands {
        let mut part = String::new();
        part.push(cmd.kind().letter());
        for v in cmd.coords() {
            if !v.is_finite() {
                return String::new();
            }
            part.push(' ');
            part.push_str(&format_coord(v));
        }
        parts.push(part);
    }
    let path = parts.join(" ");
    if path.contains("NaN") {
        return String::new();
    }
    path
}

fn format_coord(v: f32) -> String {
    let s = format!("{:.3}", v);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    match s {
        "-0" | "" => "0".to_string(),
        _ => s.to_string(),
    }
}
