use crate::core::cpu::instruction::{Instruction, Opcode};

#[derive(Debug)]
pub struct Disassembled {
    pub opcode: Opcode,
    pub text: String,
    pub status: i32,
}

pub fn register_alias(reg_index: usize) -> String {
    match reg_index {
        27 => "BP".to_string(),
        28 => "LP".to_string(),
        29 => "SP".to_string(),
        30 => "XP".to_string(),
        31 => "R31".to_string(),
        _ => format!("R{}", reg_index),
    }
}

pub fn disassemble(word: u32) -> (String, i32) {
    let disassembled = disassemble_verbose(word);
    (disassembled.text, disassembled.status)
}

pub fn disassemble_verbose(word: u32) -> Disassembled {
    let instr = Instruction(word);
    let opcode = Opcode::from_instruction(&instr);

    let ra = register_alias(instr.ra());
    let rb = register_alias(instr.rb());
    let rc = register_alias(instr.rc());
    let lit = instr.literal();

    let text = match opcode {
        Opcode::Halt => "HALT()".to_string(),
        Opcode::Ld => format!("LD({}, {}, {})", ra, lit, rc),
        Opcode::St => format!("ST({}, {}, {})", rc, lit, ra),
        Opcode::Jmp => format!("JMP({}, {})", ra, rc),
        Opcode::Beq => format!("BEQ({}, {}, {})", ra, lit, rc),
        Opcode::Bne => format!("BNE({}, {}, {})", ra, lit, rc),
        Opcode::LdrStr => format!("LDR({}, {})", lit, rc),
        Opcode::Add => format!("ADD({}, {}, {})", ra, rb, rc),
        Opcode::Sub => format!("SUB({}, {}, {})", ra, rb, rc),
        Opcode::Mul => format!("MUL({}, {}, {})", ra, rb, rc),
        Opcode::Div => format!("DIV({}, {}, {})", ra, rb, rc),
        Opcode::CmpEq => format!("CMPEQ({}, {}, {})", ra, rb, rc),
        Opcode::CmpLt => format!("CMPLT({}, {}, {})", ra, rb, rc),
        Opcode::CmpLe => format!("CMPLE({}, {}, {})", ra, rb, rc),
        Opcode::And => format!("AND({}, {}, {})", ra, rb, rc),
        Opcode::Or => format!("OR({}, {}, {})", ra, rb, rc),
        Opcode::Xor => format!("XOR({}, {}, {})", ra, rb, rc),
        Opcode::Shl => format!("SHL({}, {}, {})", ra, rb, rc),
        Opcode::Shr => format!("SHR({}, {}, {})", ra, rb, rc),
        Opcode::Sra => format!("SRA({}, {}, {})", ra, rb, rc),
        Opcode::AddC => format!("ADDC({}, {}, {})", ra, lit, rc),
        Opcode::SubC => format!("SUBC({}, {}, {})", ra, lit, rc),
        Opcode::MulC => format!("MULC({}, {}, {})", ra, lit, rc),
        Opcode::DivC => format!("DIVC({}, {}, {})", ra, lit, rc),
        Opcode::CmpEqC => format!("CMPEQC({}, {}, {})", ra, lit, rc),
        Opcode::CmpLtC => format!("CMPLTC({}, {}, {})", ra, lit, rc),
        Opcode::CmpLeC => format!("CMPLEC({}, {}, {})", ra, lit, rc),
        Opcode::AndC => format!("ANDC({}, {}, {})", ra, lit, rc),
        Opcode::OrC => format!("ORC({}, {}, {})", ra, lit, rc),
        Opcode::XorC => format!("XORC({}, {}, {})", ra, lit, rc),
        Opcode::ShlC => format!("SHLC({}, {}, {})", ra, lit, rc),
        Opcode::ShrC => format!("SHRC({}, {}, {})", ra, lit, rc),
        Opcode::SraC => format!("SRAC({}, {}, {})", ra, lit, rc),
        Opcode::Invalid => {
            return Disassembled {
                opcode,
                text: "INVALID".to_string(),
                status: -1,
            };
        }
    };

    Disassembled {
        opcode,
        text,
        status: 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(opcode: u32, ra: u32, rb: u32, rc: u32, literal: u16) -> u32 {
        (opcode << 26) | (rc << 21) | (ra << 16) | (rb << 11) | literal as u32
    }

    #[test]
    fn halt_disassembles() {
        assert_eq!(disassemble(0), ("HALT()".to_string(), 0));
    }

    #[test]
    fn add_disassembles_with_register_operands() {
        let word = encode(0x20, 1, 2, 3, 0);
        assert_eq!(disassemble(word), ("ADD(R1, R2, R3)".to_string(), 0));
    }

    #[test]
    fn addc_disassembles_with_literal_operand() {
        let word = encode(0x30, 1, 0, 3, 7);
        assert_eq!(disassemble(word), ("ADDC(R1, 7, R3)".to_string(), 0));
    }

    #[test]
    fn ld_disassembles_as_ra_literal_rc() {
        let word = encode(0x18, 4, 0, 5, 8);
        assert_eq!(disassemble(word), ("LD(R4, 8, R5)".to_string(), 0));
    }

    #[test]
    fn st_disassembles_as_rc_literal_ra() {
        let word = encode(0x19, 4, 0, 5, 8);
        assert_eq!(disassemble(word), ("ST(R5, 8, R4)".to_string(), 0));
    }

    #[test]
    fn special_registers_use_aliases() {
        let word = encode(0x20, 27, 28, 29, 0);
        assert_eq!(disassemble(word), ("ADD(BP, LP, SP)".to_string(), 0));
    }

    #[test]
    fn invalid_opcode_reports_negative_status() {
        let word = encode(0x3F, 0, 0, 0, 0);
        assert_eq!(disassemble(word), ("INVALID".to_string(), -1));
    }
}
