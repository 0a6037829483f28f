//! Recording mocks for host tests
//!
//! Every pin change, bus write and delay lands in one shared log so tests
//! can assert on the exact order of events on the wire.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use monoclock_core::config::Timing;
use monoclock_hal::spi::TransferError;
use monoclock_hal::{Clock, OutputPin, SpiBus};

use crate::ssd1306::Ssd1306;

/// One observable event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Cs(bool),
    Dc(bool),
    Rst(bool),
    /// Byte placed in the data register by `write_raw`
    Raw(u8),
    /// Bounded transfer
    Write(Vec<u8>),
    Delay(u32),
}

pub type Log = Rc<RefCell<Vec<Event>>>;

#[derive(Debug, Clone, Copy)]
pub enum Line {
    Cs,
    Dc,
    Rst,
}

pub struct MockPin {
    line: Line,
    high: bool,
    log: Log,
}

impl MockPin {
    pub fn new(line: Line, log: &Log) -> Self {
        Self {
            line,
            high: false,
            log: log.clone(),
        }
    }

    fn record(&mut self, high: bool) {
        self.high = high;
        let event = match self.line {
            Line::Cs => Event::Cs(high),
            Line::Dc => Event::Dc(high),
            Line::Rst => Event::Rst(high),
        };
        self.log.borrow_mut().push(event);
    }
}

impl OutputPin for MockPin {
    fn set_high(&mut self) {
        self.record(true);
    }

    fn set_low(&mut self) {
        self.record(false);
    }

    fn is_set_high(&self) -> bool {
        self.high
    }
}

/// Fault reported by [`MockBus`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusFault;

pub struct MockBus {
    log: Log,
    /// Busy flag never clears
    pub stuck: Rc<Cell<bool>>,
    /// Next bounded transfer fails with a fault
    pub fault: Rc<Cell<bool>>,
    /// Next bounded transfer runs out of time
    pub write_timeout: Rc<Cell<bool>>,
    /// TX-empty flag never sets; busy is unaffected
    pub tx_stuck: Rc<Cell<bool>>,
}

impl SpiBus for MockBus {
    type Error = BusFault;

    fn is_busy(&self) -> bool {
        self.stuck.get()
    }

    fn is_tx_empty(&self) -> bool {
        !self.stuck.get() && !self.tx_stuck.get()
    }

    fn write_raw(&mut self, byte: u8) -> Result<(), BusFault> {
        self.log.borrow_mut().push(Event::Raw(byte));
        Ok(())
    }

    fn write(&mut self, data: &[u8], _timeout_ms: u32) -> Result<(), TransferError<BusFault>> {
        if self.stuck.get() {
            return Err(TransferError::Timeout);
        }
        if self.write_timeout.replace(false) {
            return Err(TransferError::Timeout);
        }
        if self.fault.replace(false) {
            return Err(TransferError::Bus(BusFault));
        }
        self.log.borrow_mut().push(Event::Write(data.to_vec()));
        Ok(())
    }
}

/// Clock that only moves when told to, or on delays
///
/// With a non-zero `step`, every read advances time, so busy-waits
/// against a stuck bus still reach their timeout.
pub struct MockClock {
    pub now: Rc<Cell<u32>>,
    pub step: Rc<Cell<u32>>,
    log: Log,
}

impl Clock for MockClock {
    fn now_ms(&self) -> u32 {
        let now = self.now.get();
        self.now.set(now.wrapping_add(self.step.get()));
        now
    }

    fn delay_ms(&mut self, ms: u32) {
        self.now.set(self.now.get().wrapping_add(ms));
        self.log.borrow_mut().push(Event::Delay(ms));
    }
}

pub type MockTransport = Ssd1306<MockBus, MockPin, MockPin, MockPin, MockClock>;

/// Handles the test keeps after the transport takes ownership of the mocks
pub struct Rig {
    pub log: Log,
    pub now: Rc<Cell<u32>>,
    pub step: Rc<Cell<u32>>,
    pub stuck: Rc<Cell<bool>>,
    pub fault: Rc<Cell<bool>>,
    pub write_timeout: Rc<Cell<bool>>,
    pub tx_stuck: Rc<Cell<bool>>,
}

impl Rig {
    pub fn events(&self) -> Vec<Event> {
        self.log.borrow().clone()
    }

    pub fn clear(&self) {
        self.log.borrow_mut().clear();
    }

    /// All bounded transfers, in order
    pub fn writes(&self) -> Vec<Vec<u8>> {
        self.log
            .borrow()
            .iter()
            .filter_map(|e| match e {
                Event::Write(data) => Some(data.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn advance(&self, ms: u32) {
        self.now.set(self.now.get().wrapping_add(ms));
    }
}

pub fn transport() -> (MockTransport, Rig) {
    let log: Log = Rc::new(RefCell::new(Vec::new()));
    let rig = Rig {
        log: log.clone(),
        now: Rc::new(Cell::new(0)),
        step: Rc::new(Cell::new(0)),
        stuck: Rc::new(Cell::new(false)),
        fault: Rc::new(Cell::new(false)),
        write_timeout: Rc::new(Cell::new(false)),
        tx_stuck: Rc::new(Cell::new(false)),
    };

    let bus = MockBus {
        log: log.clone(),
        stuck: rig.stuck.clone(),
        fault: rig.fault.clone(),
        write_timeout: rig.write_timeout.clone(),
        tx_stuck: rig.tx_stuck.clone(),
    };
    let clock = MockClock {
        now: rig.now.clone(),
        step: rig.step.clone(),
        log: log.clone(),
    };

    let transport = Ssd1306::new(
        bus,
        MockPin::new(Line::Cs, &log),
        MockPin::new(Line::Dc, &log),
        MockPin::new(Line::Rst, &log),
        clock,
        Timing::default(),
    );
    (transport, rig)
}
