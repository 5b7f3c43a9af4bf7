pub use super::K160;

/// Rounds 0..20: bitwise choose.
#[inline(always)]
pub fn ch(b: u32, c: u32, d: u32) -> u32 {
    (b & c) | ((!b) & d)
}

/// Rounds 20..40 and 60..80.
#[inline(always)]
pub fn parity(b: u32, c: u32, d: u32) -> u32 {
    b ^ c ^ d
}

/// Rounds 40..60: bitwise majority.
#[inline(always)]
pub fn maj(b: u32, c: u32, d: u32) -> u32 {
    (b & c) | (b & d) | (c & d)
}

/// Round function and constant for round `i`.
#[inline(always)]
pub fn round_function(i: usize, b: u32, c: u32, d: u32) -> (u32, u32) {
    match i {
        0..=19 => (ch(b, c, d), K160[0]),
        20..=39 => (parity(b, c, d), K160[1]),
        40..=59 => (maj(b, c, d), K160[2]),
        _ => (parity(b, c, d), K160[3]),
    }
}

/// Expands the 16 block words into the 80-word message schedule.
pub fn expand(block: [u32; 16]) -> [u32; 80] {
    let mut w = [0u32; 80];
    w[..16].copy_from_slice(&block);

    for i in 16..80 {
        w[i] = (w[i - 3] ^ w[i - 8] ^ w[i - 14] ^ w[i - 16]).rotate_left(1);
    }

    w
}

#[cfg(not(feature = "speed"))]
pub fn all_rounds(state: &mut [u32; 5], block: [u32; 16]) {
    let w = expand(block);

    let [mut a, mut b, mut c, mut d, mut e] = *state;

    for (i, &wi) in w.iter().enumerate() {
        let (f, k) = round_function(i, b, c, d);

        let t = a
            .rotate_left(5)
            .wrapping_add(f)
            .wrapping_add(e)
            .wrapping_add(k)
            .wrapping_add(wi);

        e = d;
        d = c;
        c = b.rotate_left(30);
        b = a;
        a = t;
    }

    state[0] = state[0].wrapping_add(a);
    state[1] = state[1].wrapping_add(b);
    state[2] = state[2].wrapping_add(c);
    state[3] = state[3].wrapping_add(d);
    state[4] = state[4].wrapping_add(e);
}

/// Unrolled variant keeping only a 16-word window of the schedule.
#[cfg(feature = "speed")]
pub fn all_rounds(state: &mut [u32; 5], mut w: [u32; 16]) {
    let [mut a, mut b, mut c, mut d, mut e] = *state;

    macro_rules! R {
        ($i:expr) => {{
            if $i >= 16 {
                // (i + 16 - n) & 15 addresses w[i - n] in the window
                w[$i & 15] = (w[($i + 13) & 15] ^ w[($i + 8) & 15] ^ w[($i + 2) & 15] ^ w[$i & 15])
                    .rotate_left(1);
            }

            let (f, k) = round_function($i, b, c, d);

            let t = a
                .rotate_left(5)
                .wrapping_add(f)
                .wrapping_add(e)
                .wrapping_add(k)
                .wrapping_add(w[$i & 15]);

            e = d;
            d = c;
            c = b.rotate_left(30);
            b = a;
            a = t;
        }};
    }

    macro_rules! rounds {
        ($($i:literal)*) => {
            $( R!($i); )*
        };
    }

    rounds!(
        0 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19
        20 21 22 23 24 25 26 27 28 29 30 31 32 33 34 35 36 37 38 39
        40 41 42 43 44 45 46 47 48 49 50 51 52 53 54 55 56 57 58 59
        60 61 62 63 64 65 66 67 68 69 70 71 72 73 74 75 76 77 78 79
    );

    state[0] = state[0].wrapping_add(a);
    state[1] = state[1].wrapping_add(b);
    state[2] = state[2].wrapping_add(c);
    state[3] = state[3].wrapping_add(d);
    state[4] = state[4].wrapping_add(e);
}
