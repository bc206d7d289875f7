//! The Execution Engine: bounded breadth-first search over configurations for a
//! single input, yielding a three-valued [`Verdict`].

use std::rc::Rc;

use crate::config::RuntimeConfig;
use crate::configuration::Configuration;
use crate::error::EngineError;
use crate::machine::Machine;
use crate::queue::ConfigurationQueue;
use crate::symbol::Symbol;
use crate::tape::{self, Tape, TapeHandle};
use crate::transition::{Move, START_STATE};
use crate::verdict::Verdict;

/// Runs `machine` against `input` under `step_budget`, returning the verdict or a
/// fatal [`EngineError`].
pub fn run(
    machine: &Machine,
    input: &[Symbol],
    step_budget: u64,
    config: &RuntimeConfig,
) -> Result<Verdict, EngineError> {
    let span = tracing::info_span!("run_input", input_len = input.len(), step_budget);
    let _entered = span.enter();

    let seed: TapeHandle = Rc::new(Tape::seeded_with(input));
    let mut queue: ConfigurationQueue<Configuration> =
        ConfigurationQueue::new(config.queue_capacity());
    queue.enqueue(Configuration::new(START_STATE, 0, step_budget, seed))?;

    let mut cut_off_or_pruned = false;

    while let Some(configuration) = queue.dequeue() {
        let Configuration {
            state,
            head,
            steps_remaining,
            tape,
        } = configuration;
        let read_symbol = tape.read(head);
        let transitions = machine.lookup(state, read_symbol.index());
        let last_index = transitions.len().wrapping_sub(1);

        // `tape` starts out uniquely owned by this configuration (modulo sharing
        // from earlier writes). Every transition but the last one needs its own
        // clone to branch into; the last transition instead takes the handle by
        // value, so if it is the only live consumer `Rc::get_mut` inside
        // `tape::write` can succeed and mutate in place instead of duplicating.
        let mut tape = Some(tape);

        for (index, transition) in transitions.iter().enumerate() {
            if machine.is_accepting(transition.dest) {
                tracing::debug!(state = transition.dest, "accepting state reached");
                return Ok(Verdict::Accept);
            }

            let current = tape.as_ref().expect("tape available while transitions remain unprocessed");
            if is_benign_self_loop(state, current, head, transition.dest, transition.movement, read_symbol) {
                cut_off_or_pruned = true;
                continue;
            }

            let current_tape = if index == last_index {
                tape.take().expect("tape consumed at most once per configuration")
            } else {
                Rc::clone(tape.as_ref().expect("tape available for every non-last transition"))
            };

            let successor_tape = if transition.write != read_symbol {
                tape::write(current_tape, head, transition.write, config)
            } else {
                current_tape
            };

            if steps_remaining > 1 {
                queue.enqueue(Configuration::new(
                    transition.dest,
                    head + transition.movement.offset(),
                    steps_remaining - 1,
                    successor_tape,
                ))?;
            } else {
                cut_off_or_pruned = true;
            }
        }
    }

    let verdict = if cut_off_or_pruned {
        Verdict::Undetermined
    } else {
        Verdict::Reject
    };
    tracing::debug!(?verdict, "queue exhausted");
    Ok(verdict)
}

/// A same-state transition that either doesn't move, or moves across blanks at a
/// frontier the tape has never written to — it can never change the tape or the
/// state, and exploring it would only burn the step budget.
fn is_benign_self_loop(
    state: crate::transition::StateId,
    tape: &Tape,
    head: i64,
    dest: crate::transition::StateId,
    movement: Move,
    read_symbol: Symbol,
) -> bool {
    if dest != state {
        return false;
    }
    if movement == Move::Stay {
        return true;
    }
    read_symbol.is_blank() && tape.is_trivially_looped(head, movement)
}
