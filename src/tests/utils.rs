use rand::rngs::StdRng;
use rand::Rng;

use crate::huffman_coding::alphabet::Alphabet;

/// Encode `text` with `codewords`, where codewords[i] belongs to alphabet symbol i.
pub fn encode(text: &str, codewords: &[String], alphabet: &Alphabet) -> String {
    text
        .chars()
        .map(|c| codewords[alphabet.position(c).expect("symbol not in alphabet")].as_str())
        .collect()
}

/// Pack a '0'/'1' string into bytes, most significant bit first.
pub fn pack(bits: &str) -> (Vec<u8>, usize) {
    let mut bytes = vec![0_u8; (bits.len() + 7) / 8];
    for (i, c) in bits.chars().enumerate() {
        if c == '1' {
            bytes[i / 8] |= 0x80 >> (i % 8);
        }
    }
    (bytes, bits.len())
}

/// A random complete prefix code with `n` codewords, made by repeatedly splitting a random leaf.
pub fn random_code(n: usize, rng: &mut StdRng) -> Vec<String> {
    let mut code = vec![String::new()];
    while code.len() < n {
        let idx = rng.gen_range(0..code.len());
        let parent = code.swap_remove(idx);
        code.push(format!("{}0", parent));
        code.push(format!("{}1", parent));
    }
    code
}

/// `len` random symbols drawn from the first `n` symbols of `alphabet`.
pub fn random_text(len: usize, n: usize, alphabet: &Alphabet, rng: &mut StdRng) -> String {
    (0..len)
        .map(|_| alphabet.get(rng.gen_range(0..n)).expect("n within alphabet"))
        .collect()
}
