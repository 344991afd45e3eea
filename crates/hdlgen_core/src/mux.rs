//! N-to-1 multiplexer template emitter.

use crate::error::GenError;
use crate::params::selector_width_for;
use crate::pattern::binary;
use crate::MAX_SELECTOR_WIDTH;

/// Emits a VHDL N-to-1 multiplexer.
///
/// The declared `selector_width` must equal `ceil(log2(inputs))`;
/// mismatches are rejected before any text is produced. With `enable`,
/// the selection case nests inside `if enable = '1'` and the output is
/// driven low when disabled.
pub fn generate_mux(inputs: u32, selector_width: u32, enable: bool) -> Result<String, GenError> {
    if inputs == 0 {
        return Err(GenError::NonPositiveCount);
    }
    if inputs == 1 {
        return Err(GenError::UnknownConfiguration);
    }
    let expected = selector_width_for(inputs);
    if expected > MAX_SELECTOR_WIDTH {
        return Err(GenError::WidthTooLarge {
            limit: MAX_SELECTOR_WIDTH,
        });
    }
    if selector_width != expected {
        return Err(GenError::SelectorWidthMismatch {
            count: inputs,
            expected,
        });
    }

    let mut vhdl = format!(
        "library IEEE;
use IEEE.STD_LOGIC_1164.ALL;

entity mux is
    port (
        selector : in std_logic_vector({} downto 0);
        input : in std_logic_vector({} downto 0);
",
        selector_width - 1,
        inputs - 1
    );
    if enable {
        vhdl.push_str("        enable : in std_logic;\n");
    }
    vhdl.push_str(
        "        output : out std_logic
    );
end mux;

architecture Behavioral of mux is
begin
",
    );
    if enable {
        vhdl.push_str("    process (selector, input, enable)\n    begin\n");
        vhdl.push_str("        if enable = '1' then\n");
    } else {
        vhdl.push_str("    process (selector, input)\n    begin\n");
    }
    vhdl.push_str("        case selector is\n");
    for i in 0..inputs {
        vhdl.push_str(&format!(
            "            when \"{}\" => output <= input({i});\n",
            binary(i, selector_width)
        ));
    }
    vhdl.push_str("            when others => output <= '0';\n        end case;\n");
    if enable {
        vhdl.push_str("        else\n            output <= '0';\n        end if;\n");
    }
    vhdl.push_str("    end process;\nend Behavioral;\n");

    Ok(vhdl)
}
