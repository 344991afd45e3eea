//! 2^N-to-N encoder template emitter.

use crate::error::GenError;
use crate::pattern::{binary, one_hot};
use crate::MAX_ADDRESS_WIDTH;

/// Emits a VHDL 2^N-to-N encoder.
///
/// Each one-hot input pattern maps to its binary index; anything that is
/// not one-hot falls through to the all-zero default arm. With `enable`,
/// the case nests inside `if (enable_in = '1')` and the output is zeroed
/// when disabled.
pub fn generate_encoder(outputs: u32, enable: bool) -> Result<String, GenError> {
    if outputs == 0 {
        return Err(GenError::NonPositiveCount);
    }
    if outputs > MAX_ADDRESS_WIDTH {
        return Err(GenError::WidthTooLarge {
            limit: MAX_ADDRESS_WIDTH,
        });
    }
    let inputs = 1u32 << outputs;

    let mut port_lines = String::new();
    if enable {
        port_lines.push_str("        enable_in : in std_logic;\n");
    }
    port_lines.push_str(&format!(
        "        encoder_in : in std_logic_vector({} downto 0);
        encoder_out : out std_logic_vector({} downto 0)
",
        inputs - 1,
        outputs - 1
    ));

    let sensitivity = if enable {
        "enable_in, encoder_in"
    } else {
        "encoder_in"
    };

    let mut vhdl = format!(
        "library ieee;
use ieee.std_logic_1164.all;

entity Encoder_{inputs}X{outputs} is
    port (
{port_lines}    );
end entity;

architecture behav of Encoder_{inputs}X{outputs} is
begin
    process ({sensitivity})
    begin
"
    );
    if enable {
        vhdl.push_str("        if (enable_in = '1') then\n");
    }
    vhdl.push_str("            case (encoder_in) is\n");
    for i in 0..inputs {
        vhdl.push_str(&format!(
            "                when \"{}\" => encoder_out <= \"{}\";\n",
            one_hot(i, inputs),
            binary(i, outputs)
        ));
    }
    vhdl.push_str(
        "                when others => encoder_out <= (others => '0');
            end case;
",
    );
    if enable {
        vhdl.push_str("        else\n            encoder_out <= (others => '0');\n        end if;\n");
    }
    vhdl.push_str("    end process;\nend architecture;\n");

    Ok(vhdl)
}
