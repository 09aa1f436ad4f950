//! Known primes of various sizes, for testing purposes.
use alloc::vec::Vec;

use num_bigint::BigUint;
use num_traits::Num;

/// The 1024-bit MODP prime of the Oakley group 2 (RFC 2409, section 6.2).
pub(crate) const OAKLEY_GROUP_2: &str = concat![
    "FFFFFFFFFFFFFFFFC90FDAA22168C234C4C6628B80DC1CD129024E088A67CC74",
    "020BBEA63B139B22514A08798E3404DDEF9519B3CD3A431B302B0A6DF25F1437",
    "4FE1356D6D51C245E485B576625E7EC6F44C42E9A637ED6B0BFF5CB6F406B7ED",
    "EE386BFB5A899FA5AE9F24117C4B1FE649286651ECE65381FFFFFFFFFFFFFFFF",
];

/// Random primes of 128, 256, 384, 512 and 1024 bits (two of each), in hexadecimal.
const LARGE_PRIMES: &[&str] = &[
    // 128 bits
    "DBDFB0CF1CBEAB72BF43A28DE09E3893",
    // 128 bits
    "C8F40801407E356BF534A72EF582868B",
    // 256 bits
    "CBE4CD8363F0691F00A5DCB50AC459E7D8C8964A2D2647B21FC57800F0ABF1E7",
    // 256 bits
    "EE40220376497BE63C0B39BF6EC6059419B054564CDFAAD215ADEED2AF4BA103",
    // 384 bits
    concat![
        "AFED217B97EE7B33E27FF84DA3AA15FC7388F3143F415B1BE1CB07D25CD0DD05",
        "8A927CED7B8608B53717AE34FA5ACFA1",
    ],
    // 384 bits
    concat![
        "DAD5D3C0C9997747C0A9C38401DA17778D6142A4DE756A3E791022FC5DD11DD0",
        "07EAB94973486FC5ED02EBC479734175",
    ],
    // 512 bits
    concat![
        "C1888E0FF4AABDF11237A7DCE4CD6337C20D29A6ED0D9A724FE67AFF16EC50B6",
        "0CAE2EF6075E9D62DB378C7DA6F37399F1E8A8B6A41AE2DA61E314DDDE6F3D23",
    ],
    // 512 bits
    concat![
        "BA0693F20E14A08722B8AEA30F60E58327237385544AF6428B32F5016AFA3269",
        "AF4D6DC36DE58A61FD02B1C6C2D2364BD6C04289ECD6647301A332411970B7CD",
    ],
    // 1024 bits
    concat![
        "AC4B57E0AA0E5856D21C6FB9AD161A8E1E3EEB4CAD2A72F36CAC63788731FF5F",
        "A73E2BC433FF488820401862F8CE758263EA6442D445799B262EF8186941FBEA",
        "9BBC772FF3256E217B028BE45912727DDECD29CAFDFFF80DC2427BA2832D8564",
        "79F7C3EFBE0B32DB480A5908E811D43289E3DF0D32FBD36A1B7A9F295AF3A785",
    ],
    // 1024 bits
    concat![
        "F67CF63FE1E957BE71064C5E1C570BD39404E672CA43E869F6AA61324E697EBE",
        "C99FF8D5C4906D443754220F72DD6423591B7BDE1F20CCCCB5B941E1845551FB",
        "2D2FD0823D0E53D0404F0D29D8F9620C52DC9A1C05F256FDB6A86F1CD9A4FF4A",
        "ADCB4B5841F0AADF42C5574C801EBB8E533AEF935D9C3ABF7A9F6BCA8C5B344F",
    ],
];

fn parse(hex: &str) -> BigUint {
    BigUint::from_str_radix(hex, 16).unwrap()
}

/// [`LARGE_PRIMES`], followed by the Oakley group 2 prime and the Mersenne primes `2^127 - 1` and `2^521 - 1`.
pub(crate) fn large_primes() -> Vec<BigUint> {
    let mut primes = LARGE_PRIMES.iter().map(|hex| parse(hex)).collect::<Vec<_>>();
    primes.push(parse(OAKLEY_GROUP_2));
    primes.push((BigUint::from(1u32) << 127u32) - 1u32);
    primes.push((BigUint::from(1u32) << 521u32) - 1u32);
    primes
}
