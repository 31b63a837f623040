//! The [`Runner`] state machine and its per-command executors.

use tracing::debug;

use ry_consist::{Consist, MotionMode, MotionOrder};
use ry_core::RailError;
use ry_core::units::{CAR_LENGTH_M, MAX_SEGMENT_HOPS};
use ry_route::{RouteError, SwitchWalk, distance_to_named_switch, distance_to_track_end, switch_walk};
use ry_schedule::{Command, MoveTarget, Schedule};
use ry_track::TrackGraph;

use crate::error::{RunnerError, RunnerResult};
use crate::ledger::Ledger;
use crate::observer::RunObserver;
use crate::state::{RunContext, RunEvent, RunState, RunStatus, WaitCondition};

// ── Command outcome ───────────────────────────────────────────────────────────

/// What one executor call decided.
enum CommandOutcome {
    /// Finished; advance to the next command.
    Done,
    /// Suspend the run until the wait resolves.
    Suspend(WaitCondition),
    /// Precondition failed; message the crew and cancel the run.
    AbortRun(String),
}

// ── Runner ────────────────────────────────────────────────────────────────────

/// Executes one schedule against one consist.
///
/// The runner owns its [`RunContext`] and nothing else: the graph, consist,
/// ledger, and observer are borrowed per call, so independent runs share no
/// state.  Wage accrues per executed command and is charged through the
/// [`Ledger`] exactly once, at the terminal state — a cancelled run still
/// pays for the work already done.
pub struct Runner {
    schedule: Schedule,
    state: RunState,
    ctx: RunContext,
    next_notice_key: u64,
    wage_charged: bool,
}

impl Runner {
    /// Wrap an executable schedule.  Schedules that are empty or carry an
    /// `Invalid` sentinel are rejected up front.
    pub fn new(schedule: Schedule) -> RunnerResult<Runner> {
        if !schedule.is_valid() {
            return Err(RunnerError::InvalidSchedule {
                name: schedule.name,
            });
        }
        Ok(Runner {
            schedule,
            state: RunState::Idle,
            ctx: RunContext::default(),
            next_notice_key: 0,
            wage_charged: false,
        })
    }

    /// Resume a run at `index` without re-validating the schedule.
    ///
    /// The caller vouches for the schedule; handing over one with an
    /// `Invalid` sentinel at or after `index` makes the run fail with
    /// [`RunnerError::InvalidCommand`] when execution reaches it.
    pub fn resume_at(schedule: Schedule, index: usize) -> Runner {
        Runner {
            schedule,
            state: RunState::Running { index },
            ctx: RunContext::default(),
            next_notice_key: 0,
            wage_charged: false,
        }
    }

    pub fn state(&self) -> &RunState {
        &self.state
    }

    pub fn context(&self) -> &RunContext {
        &self.ctx
    }

    /// Execute commands from the current position until the run suspends,
    /// cancels, completes, or faults.
    pub fn start<G, C, L, O>(
        &mut self,
        graph: &mut G,
        consist: &mut C,
        ledger: &mut L,
        observer: &mut O,
    ) -> RunnerResult<RunStatus>
    where
        G: TrackGraph,
        C: Consist,
        L: Ledger,
        O: RunObserver,
    {
        if self.state == RunState::Idle {
            self.state = RunState::Running { index: 0 };
        }
        self.advance(graph, consist, ledger, observer)
    }

    /// Feed one external observation in.  Resolves the pending wait when the
    /// event matches it, then continues executing; mismatched events are
    /// ignored.
    pub fn on_event<G, C, L, O>(
        &mut self,
        event: RunEvent,
        graph: &mut G,
        consist: &mut C,
        ledger: &mut L,
        observer: &mut O,
    ) -> RunnerResult<RunStatus>
    where
        G: TrackGraph,
        C: Consist,
        L: Ledger,
        O: RunObserver,
    {
        let RunState::Waiting { index, wait } = self.state.clone() else {
            return Ok(self.status());
        };

        match (wait, event) {
            (WaitCondition::MoveStart { target }, RunEvent::MotionStarted) => {
                self.state = RunState::Waiting {
                    index,
                    wait: WaitCondition::MoveStop { target },
                };
                Ok(RunStatus::Waiting)
            }
            (WaitCondition::MoveStop { target }, RunEvent::MotionStopped { location }) => {
                // A stall short of the target (wrong segment) does not
                // complete the move; keep waiting for the real stop.
                if location.segment != target.segment {
                    debug!(%location, %target, "stopped short of the move target");
                    self.state = RunState::Waiting {
                        index,
                        wait: WaitCondition::MoveStop { target },
                    };
                    return Ok(RunStatus::Waiting);
                }
                self.ctx.last_location = Some(location);
                self.state = RunState::Running { index: index + 1 };
                self.advance(graph, consist, ledger, observer)
            }
            // Orders changed under a pending move: the run no longer owns
            // the consist, so cancel instead of fighting the crew.
            (
                WaitCondition::MoveStart { .. } | WaitCondition::MoveStop { .. },
                RunEvent::OrdersChanged,
            ) => {
                self.ctx.stop_requested = true;
                debug!(index, "orders changed during a pending move");
                self.finish_cancelled(index, ledger, observer)
            }
            (WaitCondition::Elapsed { remaining_secs }, RunEvent::TimeAdvanced { secs }) => {
                let remaining_secs = remaining_secs - secs;
                if remaining_secs > 0.0 {
                    self.state = RunState::Waiting {
                        index,
                        wait: WaitCondition::Elapsed { remaining_secs },
                    };
                    Ok(RunStatus::Waiting)
                } else {
                    self.state = RunState::Running { index: index + 1 };
                    self.advance(graph, consist, ledger, observer)
                }
            }
            (WaitCondition::Notice { key }, RunEvent::NoticeDismissed { key: dismissed })
                if dismissed == key =>
            {
                self.state = RunState::Running { index: index + 1 };
                self.advance(graph, consist, ledger, observer)
            }
            _ => Ok(RunStatus::Waiting),
        }
    }

    // ── Drive loop ────────────────────────────────────────────────────────────

    fn advance<G, C, L, O>(
        &mut self,
        graph: &mut G,
        consist: &mut C,
        ledger: &mut L,
        observer: &mut O,
    ) -> RunnerResult<RunStatus>
    where
        G: TrackGraph,
        C: Consist,
        L: Ledger,
        O: RunObserver,
    {
        loop {
            let RunState::Running { index } = self.state else {
                return Ok(self.status());
            };
            if self.ctx.stop_requested {
                return self.finish_cancelled(index, ledger, observer);
            }
            if index >= self.schedule.commands.len() {
                return self.finish_completed(ledger, observer);
            }

            let command = self.schedule.commands[index].clone();
            observer.on_command_start(index, &command);
            debug!(index, tag = command.tag(), "executing");

            match self.execute(&command, graph, consist, observer)? {
                CommandOutcome::Done => {
                    self.ctx.wage += command.wage();
                    self.state = RunState::Running { index: index + 1 };
                }
                CommandOutcome::Suspend(wait) => {
                    self.ctx.wage += command.wage();
                    self.state = RunState::Waiting { index, wait };
                    return Ok(RunStatus::Waiting);
                }
                CommandOutcome::AbortRun(message) => {
                    observer.on_message(&message);
                    return self.finish_cancelled(index, ledger, observer);
                }
            }
        }
    }

    fn status(&self) -> RunStatus {
        match self.state {
            RunState::Idle => RunStatus::Idle,
            RunState::Running { .. } | RunState::Waiting { .. } => RunStatus::Waiting,
            RunState::Cancelled { .. } => RunStatus::Cancelled,
            RunState::Completed => RunStatus::Completed,
        }
    }

    fn finish_cancelled<L: Ledger, O: RunObserver>(
        &mut self,
        index: usize,
        ledger: &mut L,
        observer: &mut O,
    ) -> RunnerResult<RunStatus> {
        self.state = RunState::Cancelled { index };
        self.charge_once(ledger);
        observer.on_cancelled(index);
        Ok(RunStatus::Cancelled)
    }

    fn finish_completed<L: Ledger, O: RunObserver>(
        &mut self,
        ledger: &mut L,
        observer: &mut O,
    ) -> RunnerResult<RunStatus> {
        self.state = RunState::Completed;
        self.charge_once(ledger);
        observer.on_completed();
        Ok(RunStatus::Completed)
    }

    fn charge_once<L: Ledger>(&mut self, ledger: &mut L) {
        if !self.wage_charged {
            ledger.charge(&self.schedule.name, self.ctx.wage);
            self.wage_charged = true;
        }
    }

    // ── Executors ─────────────────────────────────────────────────────────────

    fn execute<G, C, O>(
        &mut self,
        command: &Command,
        graph: &mut G,
        consist: &mut C,
        observer: &mut O,
    ) -> RunnerResult<CommandOutcome>
    where
        G: TrackGraph,
        C: Consist,
        O: RunObserver,
    {
        match command {
            Command::ConnectAir => {
                consist.connect_air();
                Ok(CommandOutcome::Done)
            }
            Command::ReleaseHandbrakes => {
                consist.release_all_handbrakes();
                Ok(CommandOutcome::Done)
            }
            Command::SetSwitch { node, thrown } => {
                if graph.is_locked(*node) {
                    return Ok(CommandOutcome::AbortRun(format!(
                        "switch {node} is locked by the interlocking"
                    )));
                }
                let prior = match graph.is_thrown(*node) {
                    Ok(prior) => prior,
                    Err(e) => return Ok(CommandOutcome::AbortRun(e.to_string())),
                };
                // Only the first touch records restore state, so repeated
                // throws within one run still restore the pre-run position.
                self.ctx.switch_restore.entry(*node).or_insert(prior);
                graph.set_thrown(*node, *thrown)?;
                debug!(%node, thrown, "switch set");
                Ok(CommandOutcome::Done)
            }
            Command::RestoreSwitches => self.restore_switches(graph),
            Command::SetHandbrake { car } => {
                if *car == 0 || !consist.set_handbrake(*car, true) {
                    observer.on_message(&format!("cannot set a handbrake on car {car}"));
                }
                Ok(CommandOutcome::Done)
            }
            Command::Uncouple { car } => {
                if !consist.uncouple_at(*car) {
                    observer.on_message(&format!("cannot uncouple at car {car}"));
                }
                Ok(CommandOutcome::Done)
            }
            Command::Move {
                direction,
                target,
                max_speed_mph,
            } => self.execute_move(graph, consist, *direction, target, *max_speed_mph),
            Command::Wait { seconds } => Ok(CommandOutcome::Suspend(WaitCondition::Elapsed {
                remaining_secs: *seconds,
            })),
            Command::NoticeWait { message } => {
                let key = self.next_notice_key;
                self.next_notice_key += 1;
                observer.on_notice(key, message);
                Ok(CommandOutcome::Suspend(WaitCondition::Notice { key }))
            }
            Command::Invalid { reason } => {
                observer.on_message(&format!("invalid command: {reason}"));
                Err(RunnerError::InvalidCommand {
                    reason: reason.clone(),
                })
            }
        }
    }

    fn restore_switches<G: TrackGraph>(&mut self, graph: &mut G) -> RunnerResult<CommandOutcome> {
        // Check every interlock before mutating anything so a locked switch
        // never leaves the restore half-applied.
        for node in self.ctx.switch_restore.keys() {
            if graph.is_locked(*node) {
                return Ok(CommandOutcome::AbortRun(format!(
                    "cannot restore switches: {node} is locked by the interlocking"
                )));
            }
        }
        let mut restores: Vec<_> = self.ctx.switch_restore.drain().collect();
        restores.sort_unstable_by_key(|(node, _)| *node);
        for (node, thrown) in restores {
            graph.set_thrown(node, thrown)?;
            debug!(%node, thrown, "switch restored");
        }
        Ok(CommandOutcome::Done)
    }

    fn execute_move<G, C>(
        &mut self,
        graph: &mut G,
        consist: &mut C,
        direction: ry_core::TravelDirection,
        target: &MoveTarget,
        max_speed_mph: Option<u32>,
    ) -> RunnerResult<CommandOutcome>
    where
        G: TrackGraph,
        C: Consist,
    {
        let start = consist.head_location(direction);
        let train_length_m = consist.total_length_m();

        let distance_m = match target {
            MoveTarget::SwitchCount {
                count,
                before,
                clear_under_train,
            } => {
                let out = switch_walk(
                    graph,
                    start,
                    train_length_m,
                    SwitchWalk {
                        count: *count,
                        before: *before,
                        clear_under_train: *clear_under_train,
                    },
                )?;
                if !out.found_all {
                    return Ok(CommandOutcome::AbortRun(format!(
                        "track ends before switch {count} ahead of the consist"
                    )));
                }
                out.distance_m
            }
            MoveTarget::NamedSwitch { node, before } => {
                match distance_to_named_switch(
                    graph,
                    start,
                    *node,
                    *before,
                    train_length_m,
                    MAX_SEGMENT_HOPS,
                ) {
                    Ok(d) => d,
                    Err(RouteError::NoRoute { .. }) => {
                        return Ok(CommandOutcome::AbortRun(format!(
                            "no route to switch {node} from here"
                        )));
                    }
                    Err(RouteError::Rail(RailError::NotASwitch(node))) => {
                        return Ok(CommandOutcome::AbortRun(format!("{node} is not a switch")));
                    }
                    Err(e) => return Err(e.into()),
                }
            }
            MoveTarget::EndOfTrack => distance_to_track_end(graph, start)?,
            MoveTarget::CarLengths { count } => *count as f32 * CAR_LENGTH_M,
        };

        let terminal = graph.location_by_moving(start, distance_m)?;
        self.ctx.last_location = Some(terminal);

        let mode = match max_speed_mph {
            Some(max_speed_mph) => MotionMode::Road { max_speed_mph },
            None => MotionMode::Yard,
        };
        consist.issue_order(MotionOrder {
            mode,
            direction,
            distance_m,
        });
        debug!(%terminal, distance_m, "move order issued");

        Ok(CommandOutcome::Suspend(WaitCondition::MoveStart {
            target: terminal,
        }))
    }
}
