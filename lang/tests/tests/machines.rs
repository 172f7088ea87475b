use calculi_tests::machine_run;
use pretty_assertions::assert_eq;

mod reverse {
    use super::*;
    use pretty_assertions::assert_eq;

    machine_run!("reverse", long, "abaabba" => "end", true, "# a b b a a b a [#] #", 66);
    machine_run!("reverse", single, "a" => "end", true, "# a [#] #", 12);
    machine_run!("reverse", pair, "ab" => "end", true, "# b a [#] #", 17);
    machine_run!("reverse", empty, "" => "end", true, "# [#] #", 5);
}

mod anbncn {
    use super::*;
    use pretty_assertions::assert_eq;

    machine_run!("anbncn", three, "aaabbbccc" => "accept", true, "# x x x x x x x x x [#]", 70);
    machine_run!("anbncn", one, "abc" => "accept", true, "# x x x [#]", 12);
    machine_run!("anbncn", zero, "" => "accept", true, "[#]", 1);
    machine_run!("anbncn", two, "aabbcc" => "accept", true, "# x x x x x x [#]", 35);
    machine_run!("anbncn", missing_b, "aabcc" => "fail", false, "# x x x x c [#]", 18);
    machine_run!("anbncn", extra_c, "aabbccc" => "check_a", false, "# x x x x x x [c] #", 38);
    machine_run!("anbncn", missing_c, "aabbc" => "fail", false, "# x x x x x [#]", 18);
    machine_run!("anbncn", interleaved, "abcabc" => "find_end", false, "x x x [a] b c", 3);
}

#[test]
fn reversal_reverses() {
    for word in ["abaabba", "a", "ab", "", "bbbab", "abababab"] {
        let run = calculi_tests::utils::run_builtin("reverse", word);
        let out = run.report.tape.contents().iter().map(|s| s.as_char()).collect::<String>();
        assert_eq!(out, word.chars().rev().collect::<String>(), "reversing {:?}", word);
        assert!(run.report.accepted());
    }
}

#[test]
fn acceptor_decides_the_language() {
    for n in 0..5 {
        let word = format!("{}{}{}", "a".repeat(n), "b".repeat(n), "c".repeat(n));
        assert!(calculi_tests::utils::run_builtin("anbncn", &word).report.accepted(), "{:?}", word);
    }
    for word in ["a", "b", "c", "ab", "acb", "aabc", "abcc", "cba", "abbc"] {
        assert!(!calculi_tests::utils::run_builtin("anbncn", word).report.accepted(), "{:?}", word);
    }
}
