//! Generates a 512-bit prime with the operating system RNG, prints its digits in reverse order,
//! then checks it again from that reversed form.

use probable_primes::{Error, generate_prime_hex, hex::to_hex_reversed, is_prime_hex_reversed};

fn main() -> Result<(), Error> {
    let prime = generate_prime_hex(512)?;

    let reversed = to_hex_reversed(&prime.to_uint());
    println!("{reversed}");

    println!("{}", is_prime_hex_reversed(&reversed)?);

    Ok(())
}
