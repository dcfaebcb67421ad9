use crate::core::cpu::Cpu;
use crate::core::memory::AddressSpace;
use crate::error::{ConstructError, LoadError};

pub struct Computer {
    memory: AddressSpace,
    cpu: Cpu,
    halted: bool,
}

impl Computer {
    pub fn new(
        program_memory_size: u32,
        video_memory_size: u32,
        kernel_memory_size: u32,
    ) -> Result<Self, ConstructError> {
        let memory = AddressSpace::new(program_memory_size, video_memory_size, kernel_memory_size)?;
        Ok(Self {
            memory,
            cpu: Cpu::new(),
            halted: false,
        })
    }

    pub fn load(&mut self, image: &[u8]) -> Result<(), LoadError> {
        self.memory.load(image)
    }

    pub fn load_interrupt_handler(&mut self, image: Option<&[u8]>) -> Result<(), LoadError> {
        self.memory.load_interrupt_handler(image)
    }

    // halted is recomputed every step, not latched: the core keeps stepping
    // past a HALT word if the host keeps calling.
    pub fn execute_step(&mut self) {
        self.halted = self.cpu.step(&mut self.memory);
    }

    pub fn raise_interrupt(&mut self, kind: u8, payload: u8) -> bool {
        self.cpu.raise_interrupt(kind, payload)
    }

    pub fn get_word(&mut self, addr: u32) -> u32 {
        self.memory.get_word(addr)
    }

    pub fn get_register(&self, index: usize) -> i32 {
        self.cpu.read_register(index)
    }

    pub fn program_counter(&self) -> u32 {
        self.cpu.program_counter()
    }

    pub fn set_program_counter(&mut self, pc: u32) {
        self.cpu.set_program_counter(pc);
    }

    pub fn halted(&self) -> bool {
        self.halted
    }

    pub fn latest_accessed(&self) -> u32 {
        self.memory.latest_accessed()
    }

    pub fn program_size(&self) -> u32 {
        self.memory.program_size()
    }

    pub fn program_slice(&self) -> &[u8] {
        self.memory.program_slice()
    }

    pub fn video_slice(&self) -> &[u8] {
        self.memory.video_slice()
    }

    pub fn kernel_slice(&self) -> &[u8] {
        self.memory.kernel_slice()
    }

    pub fn format_registers(&self) -> String {
        self.cpu.format_registers()
    }
}
