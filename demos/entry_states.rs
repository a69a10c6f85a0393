//! Entry States
//!
//! A heater that can start heating from two different places. Each entry
//! state runs its own one-shot setup and then lands in the same steady
//! `Heating` state. A flag raised from another thread requests a stop.
//!
//! Run with: cargo run --example entry_states

use std::sync::Arc;
use std::thread;
use tickstate::{states, Flag, Machine, StateMachine};

struct Heater {
    fsm: Machine<Mode>,
    stop: Arc<Flag>,
    target: u32,
    temperature: u32,
}

states! {
    enum Mode for Heater {
        Idle => idle,
        Heating => heating,
        /// Start with the saved target.
        Resume -> Heating => resume,
        /// Start with a boost target; refuses when already hot.
        Boost -> Heating => boost,
    }
}

impl Heater {
    fn idle(&mut self) {}

    fn heating(&mut self) {
        if self.stop.take() {
            println!("  stop requested at {} degrees", self.temperature);
            self.change_state(Mode::Idle);
        } else if self.temperature < self.target {
            self.temperature += 1;
        }
    }

    fn resume(&mut self) {
        self.target = 20;
        println!("  resume: target {}", self.target);
    }

    fn boost(&mut self) {
        if self.temperature >= 25 {
            println!("  boost refused: already at {}", self.temperature);
            self.change_state(Mode::Idle);
            return;
        }
        self.target = 30;
        println!("  boost: target {}", self.target);
    }
}

impl StateMachine for Heater {
    type State = Mode;
    type Attr = ();

    fn machine(&self) -> &Machine<Mode> {
        &self.fsm
    }

    fn machine_mut(&mut self) -> &mut Machine<Mode> {
        &mut self.fsm
    }
}

fn run_until_idle(heater: &mut Heater) {
    let mut ticks = 0;
    while !heater.is_state(Mode::Idle) {
        heater.update();
        ticks += 1;
        if ticks == 40 {
            let remote = Arc::clone(&heater.stop);
            thread::spawn(move || remote.raise()).join().unwrap();
        }
    }
}

fn main() {
    println!("=== Entry States ===\n");

    let mut heater = Heater {
        fsm: Machine::new(Mode::Resume),
        stop: Arc::new(Flag::new()),
        target: 0,
        temperature: 10,
    };

    println!("Resume:");
    run_until_idle(&mut heater);

    println!("\nBoost:");
    heater.change_state(Mode::Boost);
    run_until_idle(&mut heater);

    println!("\nBoost again:");
    heater.change_state(Mode::Boost);
    run_until_idle(&mut heater);

    println!("\n=== Example Complete ===");
}
