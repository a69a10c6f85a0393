//! Traffic Light State Machine
//!
//! This example demonstrates a timed, cyclic state machine.
//!
//! Key concepts:
//! - One host method per state
//! - Timed transitions via `state_elapsed()`
//! - A main loop calling `update()` once per tick
//!
//! Run with: cargo run --example traffic_light

use std::thread::sleep;
use std::time::Duration;
use tickstate::{states, Machine, StateMachine, SystemMillis, Timed};

struct TrafficLight {
    fsm: Machine<Light, Timed<SystemMillis>>,
    changes: u32,
}

states! {
    enum Light for TrafficLight {
        Red => red,
        Yellow => yellow,
        Green => green,
    }
}

impl TrafficLight {
    fn switch(&mut self, to: Light) {
        println!(
            "  {:?} -> {:?} after {} ms",
            self.state(),
            to,
            self.state_elapsed()
        );
        self.change_state(to);
        self.changes += 1;
    }

    fn red(&mut self) {
        if self.state_elapsed() >= 50 {
            self.switch(Light::Green);
        }
    }

    fn green(&mut self) {
        if self.state_elapsed() >= 40 {
            self.switch(Light::Yellow);
        }
    }

    fn yellow(&mut self) {
        if self.state_elapsed() >= 10 {
            self.switch(Light::Red);
        }
    }
}

impl StateMachine for TrafficLight {
    type State = Light;
    type Attr = Timed<SystemMillis>;

    fn machine(&self) -> &Machine<Light, Timed<SystemMillis>> {
        &self.fsm
    }

    fn machine_mut(&mut self) -> &mut Machine<Light, Timed<SystemMillis>> {
        &mut self.fsm
    }
}

fn main() {
    println!("=== Traffic Light State Machine ===\n");

    let mut light = TrafficLight {
        fsm: Machine::new(Light::Red),
        changes: 0,
    };
    println!("Initial state: {:?}\n", light.state());

    println!("Transition sequence:");
    while light.changes < 6 {
        light.update();
        sleep(Duration::from_millis(1));
    }

    println!("\nSnapshot: {}", light.machine().snapshot().to_json().unwrap());
    println!("\n=== Example Complete ===");
}
