use super::*;
use crate::printer::{LineMode, Printer};

const MODES: [LineMode; 2] = [LineMode::SingleLine, LineMode::MultiLine];

fn cmd(s: &str) -> Command {
    SimpleCommand::from_words(s.split(' ')).into()
}

fn pipe(negated: bool, cmds: &[&str]) -> Pipeline {
    let exit_status = if negated { ExitStatusType::Negated } else { ExitStatusType::Straight };
    Pipeline::new(exit_status, cmds.iter().map(|c| cmd(c)).collect())
}

fn render_at_indent<T: Render>(node: &T, mode: LineMode, level: usize) -> String {
    let mut printer = Printer::new(mode);
    {
        let mut inner = printer.indented(level);
        node.render(&mut inner);
    }
    printer.into_string()
}

#[test]
fn test_word_concatenates_components() {
    let word = Word::new(vec![RawString::new("foo"), RawString::new("'bar'"), RawString::new("baz")]);
    assert_eq!(word.to_source(LineMode::SingleLine), "foo'bar'baz");
    assert_eq!(Word::default().to_source(LineMode::SingleLine), "");
}

#[test]
fn test_assignment() {
    let a = Assignment::new("PATH", Word::new(vec![RawString::new("/bin:"), RawString::new("$PATH")]));
    assert_eq!(a.to_source(LineMode::SingleLine), "PATH=/bin:$PATH");
    assert_eq!(Assignment::new("EMPTY", Word::default()).to_source(LineMode::SingleLine), "EMPTY=");
}

#[test]
fn test_simple_command_with_assignments() {
    let c = SimpleCommand::new(
        vec![Assignment::new("A", Word::literal("1")), Assignment::new("B", Word::literal("2"))],
        vec![Word::literal("env"), Word::literal("-i")],
    );
    for mode in MODES {
        assert_eq!(c.to_source(mode), "A=1 B=2 env -i");
    }
}

#[test]
fn test_simple_command_leaves_trailing_space_deferred() {
    let mut printer = Printer::new(LineMode::SingleLine);
    SimpleCommand::from_words(["echo", "hi"]).render(&mut printer);
    assert_eq!(printer.render(), "echo hi");
    printer.commit_deferred_chars();
    assert_eq!(printer.render(), "echo hi ");
}

#[test]
fn test_pipeline_single_command() {
    for mode in MODES {
        assert_eq!(pipe(false, &["C1"]).to_source(mode), "C1");
    }
}

#[test]
fn test_pipeline_negated() {
    for mode in MODES {
        assert_eq!(pipe(true, &["C1", "C2"]).to_source(mode), "! C1 | C2");
    }
}

#[test]
fn test_pipeline_without_commands_renders_marker_only() {
    assert_eq!(pipe(false, &[]).to_source(LineMode::SingleLine), "");
    assert_eq!(pipe(true, &[]).to_source(LineMode::SingleLine), "! ");
}

#[test]
fn test_and_or_list_at_indent() {
    let list = AndOrList::sequential(pipe(true, &["C1"])).then(Condition::AndThen, pipe(true, &["C2"]));
    assert_eq!(render_at_indent(&list, LineMode::SingleLine, 1), "! C1 && ! C2");
    assert_eq!(render_at_indent(&list, LineMode::MultiLine, 1), "! C1 &&\n    ! C2");
}

#[test]
fn test_or_else_operator() {
    let list = AndOrList::sequential(pipe(false, &["make"])).then(Condition::OrElse, pipe(false, &["echo failed"]));
    assert_eq!(list.to_source(LineMode::SingleLine), "make || echo failed");
    assert_eq!(list.to_source(LineMode::MultiLine), "make ||\necho failed");
}

#[test]
fn test_sibling_conditionals_share_indent_depth() {
    let list = AndOrList::sequential(pipe(false, &["a"]))
        .then(Condition::AndThen, pipe(false, &["b"]))
        .then(Condition::OrElse, pipe(false, &["c"]));
    assert_eq!(render_at_indent(&list, LineMode::MultiLine, 1), "a &&\n    b ||\n    c");
    assert_eq!(list.to_source(LineMode::SingleLine), "a && b || c");

    let mut printer = Printer::new(LineMode::MultiLine);
    list.render(&mut printer);
    assert_eq!(printer.indent_level(), 0);
}

#[test]
fn test_conditional_with_missing_pipeline() {
    let conditional = ConditionalPipeline::new(Condition::AndThen, None);
    assert_eq!(conditional.pipeline, Pipeline::default());

    let list = AndOrList::new(pipe(false, &["true"]), vec![conditional], Synchronicity::Sequential);
    assert_eq!(list.to_source(LineMode::SingleLine), "true &&");
}

#[test]
fn test_and_or_list_has_no_trailing_separator() {
    let list = AndOrList::sequential(pipe(false, &["C1"])).then(Condition::AndThen, pipe(false, &["C2"]));
    for mode in MODES {
        let text = list.to_source(mode);
        assert!(!text.ends_with(';'), "{text:?}");
        assert!(!text.ends_with(' '), "{text:?}");
    }
}

#[test]
fn test_sequential_separator_is_deferred() {
    let mut printer = Printer::new(LineMode::SingleLine);
    AndOrList::sequential(pipe(false, &["C1"])).render(&mut printer);
    assert_eq!(printer.render(), "C1");
    printer.commit_deferred_chars();
    assert_eq!(printer.render(), "C1; ");
}

#[test]
fn test_asynchronous_marker_is_immediate() {
    let list = AndOrList::asynchronous(pipe(false, &["sleep 1"]));
    for mode in MODES {
        assert_eq!(list.to_source(mode), "sleep 1&");
    }

    let mut printer = Printer::new(LineMode::SingleLine);
    list.render(&mut printer);
    printer.append("wait");
    assert_eq!(printer.render(), "sleep 1& wait");
}

#[test]
fn test_sequence_of_three_lists() {
    let seq: Sequence = [
        AndOrList::sequential(pipe(false, &["C1"])).then(Condition::AndThen, pipe(false, &["C2"])),
        AndOrList::asynchronous(pipe(true, &["C3", "C4"])),
        AndOrList::sequential(pipe(false, &["C5"])),
    ]
    .into_iter()
    .collect();
    assert_eq!(seq.to_source(LineMode::SingleLine), "C1 && C2; ! C3 | C4& C5");
    assert_eq!(seq.to_source(LineMode::MultiLine), "C1 &&\nC2; ! C3 | C4& C5");
}

#[test]
fn test_flat_sequence_is_mode_independent() {
    let seq = Sequence::new(vec![
        AndOrList::sequential(pipe(false, &["cd build"])),
        AndOrList::sequential(pipe(false, &["make -j4"])),
        AndOrList::asynchronous(pipe(false, &["tail -f log"])),
        AndOrList::sequential(pipe(false, &["echo done"])),
    ]);
    let single = seq.to_source(LineMode::SingleLine);
    assert_eq!(single, "cd build; make -j4; tail -f log& echo done");
    assert_eq!(seq.to_source(LineMode::MultiLine), single);
}

#[test]
fn test_empty_sequence() {
    for mode in MODES {
        assert_eq!(Sequence::default().to_source(mode), "");
    }
}

#[test]
fn test_grouping() {
    let body = Sequence::new(vec![
        AndOrList::sequential(pipe(false, &["C1"])),
        AndOrList::sequential(pipe(false, &["C2"])),
    ]);
    let group = Pipeline::single(Grouping::new(body));
    assert_eq!(group.to_source(LineMode::SingleLine), "{ C1; C2; }");
    assert_eq!(group.to_source(LineMode::MultiLine), "{\n    C1; C2\n}");
}

#[test]
fn test_grouping_keeps_asynchronous_marker() {
    let body = Sequence::new(vec![AndOrList::asynchronous(pipe(false, &["job"]))]);
    let group = Pipeline::single(Grouping::new(body));
    assert_eq!(group.to_source(LineMode::SingleLine), "{ job& }");
    assert_eq!(group.to_source(LineMode::MultiLine), "{\n    job&\n}");
}

#[test]
fn test_nested_grouping_indents_each_level() {
    let inner = Grouping::new(Sequence::new(vec![AndOrList::sequential(pipe(false, &["x"]))]));
    let outer = Grouping::new(Sequence::new(vec![AndOrList::sequential(Pipeline::single(inner))]));
    let seq = Sequence::new(vec![
        AndOrList::sequential(Pipeline::single(outer)),
        AndOrList::sequential(pipe(false, &["y"])),
    ]);
    assert_eq!(seq.to_source(LineMode::SingleLine), "{ { x; }; }; y");
    assert_eq!(seq.to_source(LineMode::MultiLine), "{\n    {\n        x\n    }\n}; y");
}

#[test]
fn test_grouping_after_and_then_aligns_braces() {
    let group = Grouping::new(Sequence::new(vec![AndOrList::sequential(pipe(false, &["x"]))]));
    let list = AndOrList::sequential(pipe(false, &["a"])).then(Condition::AndThen, Pipeline::single(group));
    assert_eq!(list.to_source(LineMode::MultiLine), "a &&\n{\n    x\n}");
    assert_eq!(list.to_source(LineMode::SingleLine), "a && { x; }");
    assert_eq!(render_at_indent(&list, LineMode::MultiLine, 1), "a &&\n    {\n        x\n    }");
}

#[test]
fn test_subshell_in_pipeline() {
    let body = Sequence::new(vec![
        AndOrList::sequential(pipe(false, &["cd src"])),
        AndOrList::sequential(pipe(false, &["ls"])),
    ]);
    let pipeline = Pipeline::new(
        ExitStatusType::Straight,
        vec![Subshell::new(body).into(), cmd("wc -l")],
    );
    for mode in MODES {
        assert_eq!(pipeline.to_source(mode), "(cd src; ls) | wc -l");
    }
}

#[test]
fn test_command_location_is_not_printed() {
    let located = SimpleCommand::from_words(["ls"]).at(SourceLocation::new(Some("build.sh".into()), 7, 3));
    let command = Command::from(located);
    assert_eq!(command.location().to_string(), "build.sh:7:3");
    assert_eq!(command.to_source(LineMode::SingleLine), "ls");
}

#[test]
fn test_render_same_tree_from_many_threads() {
    let seq = Sequence::new(vec![
        AndOrList::sequential(pipe(false, &["a"])).then(Condition::OrElse, pipe(false, &["b"])),
        AndOrList::sequential(pipe(false, &["c"])),
    ]);
    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let seq = &seq;
                s.spawn(move || seq.to_source(MODES[i % 2]))
            })
            .collect();
        for (i, handle) in handles.into_iter().enumerate() {
            let expected = if i % 2 == 0 { "a || b; c" } else { "a ||\nb; c" };
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
