//! PISO and SIPO shift-register template emitters.

use crate::error::GenError;
use crate::params::ShiftRequest;

/// Emits a VHDL parallel-in serial-out shift register.
///
/// Async active-high reset; on the rising clock edge the MODE input
/// selects between loading the parallel word and shifting left.
pub fn generate_piso(bits: u32) -> Result<String, GenError> {
    if bits == 0 {
        return Err(GenError::NonPositiveBitWidth);
    }
    let msb = bits - 1;
    // For a 1-bit register the shift slice degenerates to a null range,
    // which VHDL accepts.
    let shift_msb = i64::from(bits) - 2;

    Ok(format!(
        "library ieee;
use ieee.std_logic_1164.all;

entity PISO_REG is
    port ( Data_in : in std_logic_vector ({msb} downto 0);
           MODE, CLK, Reset : in std_logic;
           Ser_Out : out std_logic
         );
end PISO_REG;

architecture Behavior of PISO_REG is
begin
    process (CLK, MODE, Data_in, Reset)
        variable shift_reg : std_logic_vector ({msb} downto 0) := (others => '0');
    begin
        if Reset = '1' then
            shift_reg := (others => '0');
            Ser_Out <= '0';
        elsif rising_edge(CLK) then
            case MODE is
                when '1' => -- load the parallel word
                    shift_reg := Data_in;
                    Ser_Out <= shift_reg({msb});
                when '0' => -- shift left
                    shift_reg := shift_reg({shift_msb} downto 0) & '0';
                    Ser_Out <= shift_reg({msb});
                when others => null;
            end case;
        end if;
    end process;
end architecture;
"
    ))
}

/// Emits a VHDL serial-in parallel-out shift register.
///
/// Async active-high reset; each rising clock edge shifts the serial bit
/// in from the MSB side.
pub fn generate_sipo(bits: u32) -> Result<String, GenError> {
    if bits == 0 {
        return Err(GenError::NonPositiveBitWidth);
    }
    let msb = bits - 1;

    Ok(format!(
        "library ieee;
use ieee.std_logic_1164.all;

entity SIPO is
    port ( SER_IN, clk, reset : in STD_LOGIC;
           Parallel_OUT : out STD_LOGIC_VECTOR({msb} downto 0)
         );
end SIPO;

architecture Arch of SIPO is
begin
    process (clk, SER_IN, reset)
        variable shift_reg : std_logic_vector({msb} downto 0) := (others => '0');
    begin
        if (reset = '1') then
            shift_reg := (others => '0');
        elsif rising_edge(clk) then
            shift_reg := SER_IN & shift_reg({msb} downto 1);
            Parallel_OUT <= shift_reg;
        end if;
    end process;
end Arch;
"
    ))
}

/// Validates a shift-register request and dispatches on the MODE flag:
/// `true` emits a PISO register, `false` a SIPO register.
///
/// Both the clock and reset flags must be set; the templates are fixed
/// synchronous designs and make no sense without them.
pub fn generate_shift(req: &ShiftRequest) -> Result<String, GenError> {
    if req.bits == 0 {
        return Err(GenError::NonPositiveBitWidth);
    }
    if !req.clock || !req.reset {
        return Err(GenError::MissingClockReset);
    }
    if req.mode {
        generate_piso(req.bits)
    } else {
        generate_sipo(req.bits)
    }
}
