//! List-decoding walkthrough for the listdecode library.
//!
//! This example encodes a short message as evaluations of a polynomial,
//! corrupts it beyond the unique-decoding radius, and recovers the message
//! with the Guruswami-Sudan decoder.

use listdecode::decoder::GsDecoder;
use listdecode::gf::GaloisField;
use listdecode::poly::Polynomial;

fn main() {
    println!("Listdecode Library - List Decoding Example\n");

    // A (7, 2) code over GF(8): messages are lines, codewords their
    // evaluations at seven points. Minimum distance 6, so unique decoding
    // corrects at most 2 errors.
    let gf8 = GaloisField::new(8).expect("8 is a prime power");
    let message = Polynomial::new(&gf8, &[5, 3]).expect("valid coefficients");
    println!("Field:    {}", gf8);
    println!("Message:  {}", message);

    let mut word: Vec<_> = gf8
        .elements()
        .take(7)
        .map(|x| {
            let y = message.evaluate(&x);
            (x, y)
        })
        .collect();
    println!(
        "Codeword: {:?}",
        word.iter().map(|(_, y)| y.value()).collect::<Vec<_>>()
    );

    // Corrupt 4 of the 7 positions.
    for (i, v) in [(0, 1u32), (2, 0), (3, 7), (5, 2)] {
        word[i].1 = gf8.element(v);
    }
    println!(
        "Received: {:?}  (4 errors)",
        word.iter().map(|(_, y)| y.value()).collect::<Vec<_>>()
    );
    println!();

    // Threshold 3 satisfies 3^2 > 7 * (2 - 1), so the decoder is complete:
    // every line agreeing in at least 3 positions appears in the list.
    let decoder = GsDecoder::new();
    let list = decoder.decode(2, &word, 3).expect("valid parameters");

    println!("Decoded list (agreement >= 3):");
    for p in &list {
        let agree = word.iter().filter(|(x, y)| p.evaluate(x) == *y).count();
        let marker = if *p == message { "  <- sent message" } else { "" };
        println!("  {}  (agrees in {} positions){}", p, agree, marker);
    }

    if list.contains(&message) {
        println!("\n✓ Recovered the message despite 4 errors in 7 symbols");
    } else {
        println!("\n✗ Message not in the decoded list");
    }
}
