pub mod utils {
    use calculi_driver::{Conf, Run, Session, builtin_machine};
    use calculi_mu::{Func, Library, parse_library};

    /// Run a bundled machine with no step bound.
    pub fn run_builtin(machine: &str, input: &str) -> Run {
        let session = Session::new(Conf::default()).unwrap();
        let def = builtin_machine(machine).unwrap();
        match session.run_machine(&def, input) {
            | Ok(run) => run,
            | Err(err) => {
                eprintln!("{}", err);
                panic!("Error running `{}` on {:?}", machine, input);
            }
        }
    }

    /// The functions of `lib/mu/arith.mu`, read with nothing predefined.
    pub fn arith_file() -> Library {
        match parse_library(calculi_driver::ARITH_MU, &Library::new()) {
            | Ok(lib) => lib,
            | Err(err) => {
                eprintln!("{}", err);
                panic!("Error reading arith.mu");
            }
        }
    }

    pub fn arith(name: &str) -> Func {
        arith_file().get(name).cloned().unwrap_or_else(|| panic!("`{}` is not in arith.mu", name))
    }
}

/// `machine_run!(machine, test_name, "input" => state, accepted, "tape", steps)`
#[macro_export]
macro_rules! machine_run {
    ($machine:literal, $name:ident, $input:literal => $state:literal, $accepted:expr, $tape:literal, $steps:literal) => {
        #[test]
        fn $name() {
            let run = ::calculi_tests::utils::run_builtin($machine, $input);
            let def = ::calculi_driver::builtin_machine($machine).unwrap();
            let report = &run.report;
            assert!(report.halted_normally());
            assert_eq!(def.program.name(report.state), $state);
            assert_eq!(report.accepted(), $accepted);
            assert_eq!(report.tape.to_string(), $tape);
            assert_eq!(report.steps, $steps);
        }
    };
}

/// `mu_value!(test_name, "function", [args] => value)`, evaluated from `arith.mu`
#[macro_export]
macro_rules! mu_value {
    ($name:ident, $func:literal, [$($arg:expr),*] => $value:expr) => {
        #[test]
        fn $name() {
            let func = ::calculi_tests::utils::arith($func);
            assert_eq!(::calculi_mu::evaluate_mu_recursive(&func, &[$($arg),*]), Ok($value));
        }
    };
}
