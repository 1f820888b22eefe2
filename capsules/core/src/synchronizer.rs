// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Two-stage input synchronizer.
//!
//! An externally driven line changes without regard to the reference clock.
//! The synchronizer samples it into stage 0 on every edge and moves stage 0
//! into stage 1; readers only ever observe stage 1. A third flop keeps stage 1
//! from the previous edge so the synchronized line can also be used as an edge
//! detector.
//!
//! Both stages reset to the idle level of a UART line (high).

use core::fmt;

use kernel::hil::clocked::{Clocked, Probe, ProbeSink};
use kernel::hil::uart;
use tock_registers::{register_bitfields, LocalRegisterCopy};

register_bitfields![u8,
    SYNC [
        /// First stage, samples the raw line.
        STAGE0 OFFSET(0) NUMBITS(1) [],
        /// Second stage, the synchronized level.
        STAGE1 OFFSET(1) NUMBITS(1) [],
        /// Stage 1 as of the previous edge.
        PREVIOUS OFFSET(2) NUMBITS(1) []
    ]
];

pub struct SyncRegister {
    stages: LocalRegisterCopy<u8, SYNC::Register>,
}

impl SyncRegister {
    /// Synchronizer for an idle-high line.
    pub fn new() -> SyncRegister {
        SyncRegister::with_reset(uart::IDLE)
    }

    pub fn with_reset(level: bool) -> SyncRegister {
        let mut stages: LocalRegisterCopy<u8, SYNC::Register> = LocalRegisterCopy::new(0);
        let bits = level as u8;
        stages.modify(SYNC::STAGE0.val(bits) + SYNC::STAGE1.val(bits) + SYNC::PREVIOUS.val(bits));
        SyncRegister { stages }
    }

    /// The synchronized level (stage 1).
    pub fn level(&self) -> bool {
        self.stages.is_set(SYNC::STAGE1)
    }

    /// The synchronized level went from high to low on the last edge.
    pub fn fell(&self) -> bool {
        self.stages.is_set(SYNC::PREVIOUS) && !self.stages.is_set(SYNC::STAGE1)
    }

    /// The synchronized level went from low to high on the last edge.
    pub fn rose(&self) -> bool {
        !self.stages.is_set(SYNC::PREVIOUS) && self.stages.is_set(SYNC::STAGE1)
    }
}

impl fmt::Debug for SyncRegister {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SyncRegister")
            .field("stage0", &self.stages.is_set(SYNC::STAGE0))
            .field("stage1", &self.stages.is_set(SYNC::STAGE1))
            .finish()
    }
}

impl Clocked for SyncRegister {
    /// Raw line.
    type Input = bool;
    /// Synchronized line.
    type Output = bool;

    fn output(&self) -> bool {
        self.level()
    }

    fn tick(&mut self, raw: bool) {
        let stage0 = self.stages.read(SYNC::STAGE0);
        let stage1 = self.stages.read(SYNC::STAGE1);
        self.stages.modify(
            SYNC::PREVIOUS.val(stage1) + SYNC::STAGE1.val(stage0) + SYNC::STAGE0.val(raw as u8),
        );
    }
}

impl Probe for SyncRegister {
    fn probe(&self, sink: &mut dyn ProbeSink) {
        sink.signal("stage0", 1, self.stages.read(SYNC::STAGE0) as u32);
        sink.signal("stage1", 1, self.stages.read(SYNC::STAGE1) as u32);
    }
}
