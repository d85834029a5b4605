//! Plain-vs-SIMD throughput runner
//!
//! Each [`Suite`] times one operation twice, once on the scalar types from
//! [`crate::plain`] and once on the SIMD kernel, and reports nanoseconds per
//! call. Inputs and results pass through [`black_box`] so the optimizer cannot
//! hoist or drop the work.

use std::fmt;
use std::hint::black_box;
use std::time::Instant;

use serde::{Deserialize, Serialize};
use simd4_math::{Mat4, Quat, Vec4};

use crate::config::ThroughputConfig;
use crate::plain::{self, PlainQuat, PlainVec4};

/// One timed operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Suite {
    Normalize,
    /// SIMD side uses the reciprocal square root estimate
    FastNormalize,
    Cross,
    QuatMul,
    QuatToMat,
    MatVec,
    MatMul,
    Transpose,
}

impl Suite {
    pub const ALL: [Suite; 8] = [
        Suite::Normalize,
        Suite::FastNormalize,
        Suite::Cross,
        Suite::QuatMul,
        Suite::QuatToMat,
        Suite::MatVec,
        Suite::MatMul,
        Suite::Transpose,
    ];

    /// Name as written in config files
    pub fn name(&self) -> &'static str {
        match self {
            Suite::Normalize => "normalize",
            Suite::FastNormalize => "fast_normalize",
            Suite::Cross => "cross",
            Suite::QuatMul => "quat_mul",
            Suite::QuatToMat => "quat_to_mat",
            Suite::MatVec => "mat_vec",
            Suite::MatMul => "mat_mul",
            Suite::Transpose => "transpose",
        }
    }
}

impl fmt::Display for Suite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Timing result for one suite
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SuiteReport {
    pub suite: Suite,
    /// Nanoseconds per call, scalar implementation
    pub plain_ns: f64,
    /// Nanoseconds per call, SIMD implementation
    pub simd_ns: f64,
}

impl SuiteReport {
    /// How many times faster the SIMD side ran; `None` when nothing was timed
    pub fn speedup(&self) -> Option<f64> {
        if self.simd_ns > 0.0 {
            Some(self.plain_ns / self.simd_ns)
        } else {
            None
        }
    }
}

fn ns_per_call<T>(config: &ThroughputConfig, mut op: impl FnMut() -> T) -> f64 {
    for _ in 0..config.warmup_iterations {
        black_box(op());
    }
    if config.iterations == 0 {
        return 0.0;
    }

    let start = Instant::now();
    for _ in 0..config.iterations {
        black_box(op());
    }
    start.elapsed().as_nanos() as f64 / config.iterations as f64
}

/// Time the scalar and SIMD versions of one operation
pub fn run_suite(suite: Suite, config: &ThroughputConfig) -> SuiteReport {
    log::debug!(
        "{}: {} warmup + {} timed calls per side",
        suite,
        config.warmup_iterations,
        config.iterations
    );

    let plain_a = PlainVec4::new(1.0, 2.0, 3.0, 4.0);
    let plain_b = PlainVec4::new(2.0, 3.0, 4.0, 5.0);
    let simd_a = Vec4::from(plain_a);
    let simd_b = Vec4::from(plain_b);

    let plain_p = PlainQuat::new(0.1, 0.2, 0.3, 0.9);
    let plain_q = PlainQuat::new(-0.4, 0.5, 0.1, 0.75);
    let simd_p = Quat::from(plain_p);
    let simd_q = Quat::from(plain_q);

    let plain_m = plain::plain_mat_mul(
        &plain::plain_perspective(1.0, 1.5, 0.5, 50.0),
        &plain::plain_look_at([1.0, 2.0, 3.0], [0.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
    );
    let simd_m: Mat4 = plain::to_simd_mat(&plain_m);

    let (plain_ns, simd_ns) = match suite {
        Suite::Normalize => (
            ns_per_call(config, || black_box(plain_a).normalize()),
            ns_per_call(config, || black_box(simd_a).normalize()),
        ),
        Suite::FastNormalize => (
            ns_per_call(config, || black_box(plain_a).normalize()),
            ns_per_call(config, || black_box(simd_a).fast_normalize()),
        ),
        Suite::Cross => (
            ns_per_call(config, || black_box(plain_a).cross(&black_box(plain_b))),
            ns_per_call(config, || black_box(simd_a).cross(black_box(simd_b))),
        ),
        Suite::QuatMul => (
            ns_per_call(config, || black_box(plain_p).mul(&black_box(plain_q))),
            ns_per_call(config, || black_box(simd_p) * black_box(simd_q)),
        ),
        Suite::QuatToMat => (
            ns_per_call(config, || black_box(plain_p).to_mat4()),
            ns_per_call(config, || black_box(simd_p).to_mat4()),
        ),
        Suite::MatVec => (
            ns_per_call(config, || plain::plain_transform(&black_box(plain_m), &black_box(plain_a))),
            ns_per_call(config, || black_box(simd_m) * black_box(simd_a)),
        ),
        Suite::MatMul => (
            ns_per_call(config, || plain::plain_mat_mul(&black_box(plain_m), &black_box(plain_m))),
            ns_per_call(config, || black_box(simd_m) * black_box(simd_m)),
        ),
        Suite::Transpose => (
            ns_per_call(config, || plain::plain_transpose(&black_box(plain_m))),
            ns_per_call(config, || black_box(simd_m).transpose()),
        ),
    };

    let report = SuiteReport { suite, plain_ns, simd_ns };
    match report.speedup() {
        Some(speedup) => log::info!(
            "{}: plain {:.2} ns, simd {:.2} ns ({:.2}x)",
            suite,
            plain_ns,
            simd_ns,
            speedup
        ),
        None => log::info!("{}: no timed iterations", suite),
    }
    report
}

/// Run every configured suite in order
pub fn run_all(config: &ThroughputConfig) -> Vec<SuiteReport> {
    config.suites.iter().map(|&suite| run_suite(suite, config)).collect()
}

/// Render reports as a fixed-width text table
pub fn format_table(reports: &[SuiteReport]) -> String {
    let mut out = format!("{:<16} {:>12} {:>12} {:>9}\n", "suite", "plain ns", "simd ns", "speedup");
    for report in reports {
        let speedup = report
            .speedup()
            .map(|s| format!("{:.2}x", s))
            .unwrap_or_else(|| "-".to_string());
        out.push_str(&format!(
            "{:<16} {:>12.2} {:>12.2} {:>9}\n",
            report.suite.name(),
            report.plain_ns,
            report.simd_ns,
            speedup
        ));
    }
    out
}
