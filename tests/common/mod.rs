//! Shared test double: a recording implementation of the `Hw` trait.
//!
//! `TraceHw` backs the full 64 KiB address space with plain memory and
//! keeps an ordered event log of every register access and interrupt-mask
//! change. The two latch behaviours that matter for the raster interrupt
//! lifecycle are modelled: the CIA interrupt control registers clear their
//! pending latch on read, and the VIC interrupt latch is write-1-to-clear.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use c64_raster_irq::devices::{cia, vic};
use c64_raster_irq::{Hw, ISR};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    DisableInt,
    EnableInt,
    Read(u16),
    Write(u16, u8),
    Callback,
}

/// Log shared between the hardware double and test ISRs, so callback
/// invocations appear interleaved with register traffic.
pub type EventLog = Rc<RefCell<Vec<Event>>>;

pub struct TraceHw {
    pub mem: Vec<u8>,
    pub int_enabled: bool,
    log: EventLog,
}

impl TraceHw {
    pub fn new() -> TraceHw {
        TraceHw {
            mem: vec![0; 0x10000],
            // a freshly booted machine is servicing KERNAL interrupts
            int_enabled: true,
            log: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn log(&self) -> EventLog {
        Rc::clone(&self.log)
    }

    pub fn events(&self) -> Vec<Event> {
        self.log.borrow().clone()
    }
}

impl Hw for TraceHw {
    fn peek(&mut self, addr: u16) -> u8 {
        self.log.borrow_mut().push(Event::Read(addr));
        let value = self.mem[addr as usize];
        // reading a CIA interrupt control register clears its latch
        if addr == cia::CIA1_ICR || addr == cia::CIA2_ICR {
            self.mem[addr as usize] = 0;
        }
        value
    }

    fn poke(&mut self, addr: u16, value: u8) {
        self.log.borrow_mut().push(Event::Write(addr, value));
        if addr == vic::IRQ_STATUS {
            // write 1 to clear
            self.mem[addr as usize] &= !value;
        } else if addr == cia::CIA1_ICR || addr == cia::CIA2_ICR {
            // writes address the mask side; the pending latch a read
            // returns is untouched
        } else {
            self.mem[addr as usize] = value;
        }
    }

    fn disable_int(&mut self) {
        self.int_enabled = false;
        self.log.borrow_mut().push(Event::DisableInt);
    }

    fn enable_int(&mut self) {
        self.int_enabled = true;
        self.log.borrow_mut().push(Event::EnableInt);
    }
}

/// Per-frame ISR counting its invocations and recording each one in the
/// shared event log.
pub struct CountingIsr {
    pub count: Cell<usize>,
    log: EventLog,
}

impl CountingIsr {
    pub fn new(log: EventLog) -> CountingIsr {
        CountingIsr {
            count: Cell::new(0),
            log,
        }
    }
}

impl ISR for CountingIsr {
    fn trigger(&self) {
        self.count.set(self.count.get() + 1);
        self.log.borrow_mut().push(Event::Callback);
    }
}

/// Index of the first occurrence of `wanted`, panicking with the trace
/// printed if it never happened.
pub fn position(events: &[Event], wanted: Event) -> usize {
    events
        .iter()
        .position(|e| *e == wanted)
        .unwrap_or_else(|| panic!("event {:?} not found in trace {:?}", wanted, events))
}
