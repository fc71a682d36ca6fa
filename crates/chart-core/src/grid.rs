// File: crates/chart-core/src/grid.rs
// Summary: Tick layout helpers: 1/2/5 x 10^k "nice" ticks and their label formatting.

const E10: f64 = 7.0710678118654755; // sqrt(50)
const E5: f64 = 3.1622776601683795; // sqrt(10)
const E2: f64 = 1.4142135623730951; // sqrt(2)

/// Largest tick index that is still an exact integer in f64 (2^53).
const MAX_INDEX: f64 = 9_007_199_254_740_992.0;
/// Upper bound on ticks produced by one call.
const MAX_TICKS: f64 = 1_000_000.0;

fn index_fits(i: f64) -> bool {
    i.is_finite() && i.abs() <= MAX_INDEX
}

/// Integer tick indices `i1..=i2` and the increment between them. A negative
/// increment means "divide by -inc", which keeps fractional steps exact.
#[derive(Clone, Copy, Debug)]
struct TickSpec {
    i1: i64,
    i2: i64,
    inc: f64,
}

impl TickSpec {
    fn value(&self, i: i64) -> f64 {
        if self.inc < 0.0 { i as f64 / -self.inc } else { i as f64 * self.inc }
    }

    fn step(&self) -> f64 {
        if self.inc < 0.0 { 1.0 / -self.inc } else { self.inc }
    }
}

fn tick_spec(start: f64, stop: f64, count: f64) -> Option<TickSpec> {
    let step = (stop - start) / count.max(0.0);
    if !step.is_finite() || step <= 0.0 {
        return None;
    }
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };

    // Indices stay in f64 until they are known to fit; near-degenerate spans
    // can put `start * inc` far beyond i64.
    let (i1, i2, inc) = if power < 0.0 {
        let inc = 10f64.powf(-power) / factor;
        let mut i1 = (start * inc).round();
        let mut i2 = (stop * inc).round();
        if i1 / inc < start { i1 += 1.0; }
        if i2 / inc > stop { i2 -= 1.0; }
        (i1, i2, -inc)
    } else {
        let inc = 10f64.powf(power) * factor;
        let mut i1 = (start / inc).round();
        let mut i2 = (stop / inc).round();
        if i1 * inc < start { i1 += 1.0; }
        if i2 * inc > stop { i2 -= 1.0; }
        (i1, i2, inc)
    };
    if !index_fits(i1) || !index_fits(i2) || i2 - i1 > MAX_TICKS {
        return None;
    }
    let (i1, i2) = (i1 as i64, i2 as i64);

    if i2 < i1 && (0.5..2.0).contains(&count) {
        return tick_spec(start, stop, count * 2.0);
    }
    if !inc.is_finite() || inc == 0.0 {
        return None;
    }
    Some(TickSpec { i1, i2, inc })
}

/// Evenly spaced, human-friendly tick values within `[start, stop]`, approximately
/// `count` of them. Equal bounds yield the single bound; a zero count or non-finite
/// bounds yield nothing. Reversed bounds produce descending ticks.
pub fn nice_ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if count == 0 || !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }
    let reverse = stop < start;
    let (lo, hi) = if reverse { (stop, start) } else { (start, stop) };
    let Some(spec) = tick_spec(lo, hi, count as f64) else {
        // Span too small (or too large) for 1/2/5 steps: keep the bounds.
        return if reverse { vec![hi, lo] } else { vec![lo, hi] };
    };
    if spec.i2 < spec.i1 {
        return Vec::new();
    }
    let mut out: Vec<f64> = (spec.i1..=spec.i2).map(|i| spec.value(i)).collect();
    if reverse {
        out.reverse();
    }
    out
}

/// Distance between consecutive [`nice_ticks`] for the same arguments.
pub fn tick_step(start: f64, stop: f64, count: usize) -> Option<f64> {
    if count == 0 || !start.is_finite() || !stop.is_finite() || start == stop {
        return None;
    }
    let (lo, hi) = if stop < start { (stop, start) } else { (start, stop) };
    match tick_spec(lo, hi, count as f64) {
        Some(spec) => Some(spec.step()),
        None => Some(hi - lo).filter(|s| s.is_finite() && *s > 0.0),
    }
}

/// Format a tick value with just enough decimals to distinguish ticks `step`
/// apart, grouping thousands with commas (`2,500`, `0.25`, `-1.5`).
pub fn format_tick(value: f64, step: f64) -> String {
    let decimals = if step.is_finite() && step > 0.0 {
        (-step.abs().log10().floor()).max(0.0) as usize
    } else {
        0
    };
    let raw = format!("{:.*}", decimals, value);
    let (negative, digits) = match raw.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, raw.as_str()),
    };
    let (int_part, frac_part) = match digits.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (digits, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let is_zero = digits.chars().all(|c| c == '0' || c == '.');
    let mut out = String::new();
    if negative && !is_zero {
        out.push('-');
    }
    out.push_str(&grouped);
    if let Some(f) = frac_part {
        out.push('.');
        out.push_str(f);
    }
    out
}
