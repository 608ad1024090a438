//! Text rendering of problems, traces, and reports

use std::fmt::Write;

use msqrt::{trim_radix_string, Problem, Register, RunReport, Step};

use crate::Tally;

/// Hexadecimal magnitude with a sign and without leading zeros
pub fn value(r: &Register) -> String {
    let digits = r
        .to_string_radix(16)
        .map(|s| trim_radix_string(&s).to_owned())
        .unwrap_or_default();
    let sign = if r.is_negative() { "-" } else { "" };
    let mut flags = String::new();
    if r.overflow() {
        flags.push_str(" (overflow)");
    }
    if r.underflow() {
        flags.push_str(" (underflow)");
    }
    format!("{sign}0x{digits}{flags}")
}

pub fn problem(p: &Problem) -> String {
    format!(
        "  A = {}\n  B = {}\n  S = {}\n",
        value(p.a()),
        value(p.b()),
        value(p.s())
    )
}

pub fn step(s: &Step) -> String {
    let mut out = format!(
        "  [{:>3}] b = {:<4} s = {:<4}",
        s.iteration, s.multiplier_digit, s.root_digit
    );
    if let Some(d) = s.selected_digit {
        let _ = write!(out, " d = {d:<3}");
    }
    let _ = write!(out, " W = {} S = {}", value(&s.residual), value(&s.root));
    if let (Some(w), Some(r)) = (&s.practical_residual, &s.practical_root) {
        let _ = write!(out, " Wp = {} Sp = {}", value(w), value(r));
    }
    out.push('\n');
    out
}

fn verdict(ok: bool) -> &'static str {
    if ok {
        "yes"
    } else {
        "no"
    }
}

pub fn report(r: &RunReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "  residual zero:  {}", verdict(r.residual_zero));
    let _ = writeln!(out, "  root recovered: {}", verdict(r.root_recovered));
    if r.overflow || r.underflow {
        let _ = writeln!(
            out,
            "  residual flags: overflow {}, underflow {}",
            verdict(r.overflow),
            verdict(r.underflow)
        );
    }
    let _ = writeln!(out, "  root = {}", value(&r.root));
    let digits: Vec<String> = r.digits.iter().map(|d| d.to_string()).collect();
    let _ = writeln!(out, "  digits = [{}]", digits.join(", "));
    if let Some(oracle) = &r.oracle {
        let _ = writeln!(
            out,
            "  oracle: residual zero {}, root recovered {}",
            verdict(oracle.residual_zero),
            verdict(oracle.root_recovered)
        );
    }
    for advisory in &r.advisories {
        let _ = writeln!(out, "  note: {advisory:?}");
    }
    if !r.is_success() {
        let _ = writeln!(out, "  A*B = {}", value(&r.product));
        let _ = writeln!(out, "  residual = {}", value(&r.residual));
    }
    out
}

pub fn tally(t: &Tally) -> String {
    let mut out = format!(
        "passed: {}, degraded: {}, failed: {}, aborted: {}",
        t.success, t.degraded, t.failed, t.aborted
    );
    if t.disagreements != 0 {
        let _ = write!(out, ", oracle disagreements: {}", t.disagreements);
    }
    out.push('\n');
    out
}
