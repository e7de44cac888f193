//! On-target self tests
//!
//! Runs plain checks on the board itself and prints the results over serial,
//! for when there is no debugger attached.

use ufmt::{uWrite, uwrite};

use crate::change::ChangeDetector;
use crate::scaling::{adc_to_duty, adc_to_percent, celsius_to_fahrenheit, tmp36_celsius, tmp36_fahrenheit, Centi};
use crate::sketches::{ThermometerState, Unit};

pub trait TestCase {
    fn run(&self) -> TestResult;
    fn name(&self) -> &'static str;
}

#[derive(Debug, PartialEq)]
pub enum TestResult {
    Pass,
    Fail(TestError),
}

#[derive(Debug, PartialEq)]
pub enum TestError {
    AssertionFailed(&'static str),
}

pub struct TestRunner<W> {
    console: W,
    total_tests: u32,
    passed_tests: u32,
    current_suite: &'static str,
}

impl<W: uWrite> TestRunner<W> {
    pub fn new(console: W) -> Self {
        Self {
            console,
            total_tests: 0,
            passed_tests: 0,
            current_suite: "",
        }
    }

    pub fn run_suite(&mut self, name: &'static str, tests: &[&dyn TestCase]) -> Result<(), W::Error> {
        self.current_suite = name;
        uwrite!(self.console, "\r\n=== Test Suite: {} ===\r\n", name)?;

        for test in tests {
            self.total_tests += 1;
            uwrite!(self.console, "Running {}: ", test.name())?;

            match test.run() {
                TestResult::Pass => {
                    self.passed_tests += 1;
                    self.console.write_str("PASS\r\n")?;
                }
                TestResult::Fail(TestError::AssertionFailed(what)) => {
                    uwrite!(self.console, "FAIL - {}\r\n", what)?;
                }
            }
        }

        self.print_summary()
    }

    fn print_summary(&mut self) -> Result<(), W::Error> {
        uwrite!(self.console, "\r\nTest Summary for {}:\r\n", self.current_suite)?;
        let percent = if self.total_tests == 0 {
            0
        } else {
            (self.passed_tests * 100) / self.total_tests
        };
        uwrite!(
            self.console,
            "Passed: {}/{} ({}%)\r\n",
            self.passed_tests,
            self.total_tests,
            percent
        )
    }

    pub fn passed(&self) -> u32 {
        self.passed_tests
    }

    pub fn total(&self) -> u32 {
        self.total_tests
    }

    pub fn release(self) -> W {
        self.console
    }
}

#[macro_export]
macro_rules! expect_eq {
    ($left:expr, $right:expr) => {
        if $left != $right {
            return $crate::testing::TestResult::Fail($crate::testing::TestError::AssertionFailed(
                concat!(
                    "expected `",
                    stringify!($left),
                    "` == `",
                    stringify!($right),
                    "`"
                ),
            ));
        }
    };
}

#[macro_export]
macro_rules! expect_within {
    ($value:expr, $target:expr, $tolerance:expr) => {
        if ($value - $target).abs() > $tolerance {
            return $crate::testing::TestResult::Fail($crate::testing::TestError::AssertionFailed(
                concat!(
                    "expected `",
                    stringify!($value),
                    "` within ",
                    stringify!($tolerance),
                    " of `",
                    stringify!($target),
                    "`"
                ),
            ));
        }
    };
}

pub struct ScalingTest;
impl TestCase for ScalingTest {
    fn name(&self) -> &'static str {
        "ADC scaling bounds"
    }

    fn run(&self) -> TestResult {
        expect_eq!(adc_to_duty(0), 0);
        expect_eq!(adc_to_duty(1023), 255);
        expect_eq!(adc_to_percent(1023), 100);

        let mut last = 0;
        for raw in 0..=1023 {
            let duty = adc_to_duty(raw);
            if duty < last {
                return TestResult::Fail(TestError::AssertionFailed("duty is not monotonic"));
            }
            last = duty;
        }

        TestResult::Pass
    }
}

pub struct TemperatureTest;
impl TestCase for TemperatureTest {
    fn name(&self) -> &'static str {
        "Temperature conversion"
    }

    fn run(&self) -> TestResult {
        expect_eq!(celsius_to_fahrenheit(Centi::from_whole(0)), Centi::from_whole(32));
        expect_eq!(celsius_to_fahrenheit(Centi::from_whole(100)), Centi::from_whole(212));
        // 0.75V on the TMP36 is 25C, quantised by the 10-bit ADC
        expect_within!(tmp36_celsius(153).hundredths(), 2500, 50);
        expect_within!(tmp36_fahrenheit(153).hundredths(), 7700, 90);

        TestResult::Pass
    }
}

pub struct ChangeDetectorTest;
impl TestCase for ChangeDetectorTest {
    fn name(&self) -> &'static str {
        "Pot change suppression"
    }

    fn run(&self) -> TestResult {
        let mut detector = ChangeDetector::new();
        expect_eq!(detector.update([1u16, 2, 3]), true);
        expect_eq!(detector.update([1u16, 2, 3]), false);
        expect_eq!(detector.update([1u16, 2, 4]), true);

        TestResult::Pass
    }
}

pub struct ThermometerStateTest;
impl TestCase for ThermometerStateTest {
    fn name(&self) -> &'static str {
        "Thermometer toggles"
    }

    fn run(&self) -> TestResult {
        let mut state = ThermometerState::new();
        expect_eq!(state.reading(153), None);

        state.toggle_power();
        expect_eq!(state.indicators().blue, true);
        state.toggle_unit();
        expect_eq!(state.unit(), Unit::Fahrenheit);
        expect_eq!(state.indicators().yellow, true);

        state.toggle_power();
        expect_eq!(state.indicators().green, false);
        expect_eq!(state.reading(153), None);

        TestResult::Pass
    }
}

/// Everything that can run without extra hardware attached.
pub fn builtin_cases() -> [&'static dyn TestCase; 4] {
    [
        &ScalingTest,
        &TemperatureTest,
        &ChangeDetectorTest,
        &ThermometerStateTest,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::Sink;

    struct AlwaysFails;
    impl TestCase for AlwaysFails {
        fn name(&self) -> &'static str {
            "always fails"
        }

        fn run(&self) -> TestResult {
            expect_eq!(1 + 1, 3);
            TestResult::Pass
        }
    }

    #[test]
    fn builtin_cases_pass() {
        for case in builtin_cases() {
            assert_eq!(case.run(), TestResult::Pass, "{}", case.name());
        }
    }

    #[test]
    fn runner_prints_failures_and_summary() {
        let cases: [&dyn TestCase; 2] = [&ScalingTest, &AlwaysFails];
        let mut runner = TestRunner::new(Sink::default());
        runner.run_suite("mixed", &cases).unwrap();

        assert_eq!((runner.passed(), runner.total()), (1, 2));
        let out = runner.release();
        assert!(out.as_str().contains("Running ADC scaling bounds: PASS\r\n"));
        assert!(out
            .as_str()
            .contains("Running always fails: FAIL - expected `1 + 1` == `3`\r\n"));
        assert!(out.as_str().ends_with("Passed: 1/2 (50%)\r\n"));
    }
}
