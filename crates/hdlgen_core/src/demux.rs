//! 1-to-N demultiplexer template emitter.

use crate::error::GenError;
use crate::params::selector_width_for;
use crate::pattern::binary;
use crate::MAX_SELECTOR_WIDTH;

/// Emits a VHDL 1-to-N demultiplexer.
///
/// `inputs` sets the width of the routed vector (one for the classic
/// single-line demux); `outputs` is the fan-out. The declared
/// `selector_width` must equal `ceil(log2(outputs))`.
pub fn generate_demux(
    inputs: u32,
    outputs: u32,
    selector_width: u32,
    enable: bool,
) -> Result<String, GenError> {
    if inputs == 0 || outputs == 0 {
        return Err(GenError::NonPositiveCount);
    }
    if outputs == 1 {
        return Err(GenError::UnknownConfiguration);
    }
    let expected = selector_width_for(outputs);
    if expected > MAX_SELECTOR_WIDTH {
        return Err(GenError::WidthTooLarge {
            limit: MAX_SELECTOR_WIDTH,
        });
    }
    if selector_width != expected {
        return Err(GenError::SelectorWidthMismatch {
            count: outputs,
            expected,
        });
    }

    let in_msb = inputs - 1;
    let mut port_lines = String::new();
    for i in 0..outputs {
        port_lines.push_str(&format!(
            "        out{i} : out std_logic_vector({in_msb} downto 0)"
        ));
        if i + 1 < outputs || enable {
            port_lines.push(',');
        }
        port_lines.push('\n');
    }
    if enable {
        port_lines.push_str("        enable : in std_logic\n");
    }

    let mut vhdl = format!(
        "library IEEE;
use IEEE.STD_LOGIC_1164.ALL;

entity de_mux is
    port (
        selector : in std_logic_vector({} downto 0);
        input : in std_logic_vector({in_msb} downto 0);
{port_lines}    );
end de_mux;

architecture Behavioral of de_mux is
begin
",
        selector_width - 1
    );
    if enable {
        vhdl.push_str("    process (selector, input, enable)\n    begin\n");
        vhdl.push_str("        if enable = '1' then\n");
    } else {
        vhdl.push_str("    process (selector, input)\n    begin\n");
    }
    vhdl.push_str("        case selector is\n");
    for i in 0..outputs {
        vhdl.push_str(&format!(
            "            when \"{}\" => out{i} <= input;\n",
            binary(i, selector_width)
        ));
    }
    vhdl.push_str("            when others => null;\n        end case;\n");
    if enable {
        vhdl.push_str("        end if;\n");
    }
    vhdl.push_str("    end process;\nend Behavioral;\n");

    Ok(vhdl)
}
