//! N-to-2^N decoder template emitter.

use crate::error::GenError;
use crate::pattern::{binary, one_hot};
use crate::MAX_ADDRESS_WIDTH;

/// Emits a VHDL N-to-2^N one-hot decoder.
///
/// Every selector value gets its own case branch driving a one-hot
/// pattern of width `2^inputs`; undefined selector values drive all
/// zeros.
pub fn generate_decoder(inputs: u32) -> Result<String, GenError> {
    if inputs == 0 {
        return Err(GenError::NonPositiveCount);
    }
    if inputs > MAX_ADDRESS_WIDTH {
        return Err(GenError::WidthTooLarge {
            limit: MAX_ADDRESS_WIDTH,
        });
    }
    let outputs = 1u32 << inputs;

    let mut vhdl = format!(
        "library ieee;
use ieee.std_logic_1164.all;

entity Decoder_{inputs}x{outputs} is
    port (
        input_bits : in std_logic_vector({} downto 0);
        decoder_out : out std_logic_vector({} downto 0)
    );
end entity;

architecture behavior of Decoder_{inputs}x{outputs} is
begin
    process (input_bits)
    begin
        case input_bits is
",
        inputs - 1,
        outputs - 1
    );
    for i in 0..outputs {
        vhdl.push_str(&format!(
            "            when \"{}\" => decoder_out <= \"{}\";\n",
            binary(i, inputs),
            one_hot(i, outputs)
        ));
    }
    vhdl.push_str(
        "            when others => decoder_out <= (others => '0');
        end case;
    end process;
end architecture;
",
    );

    Ok(vhdl)
}
