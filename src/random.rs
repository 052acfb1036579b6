/// Pseudorandom number generator from the "Xorshift RNGs" paper by George Marsaglia.
///
/// Seeded explicitly so a failing test can be replayed.
pub struct XorShift(u32);

impl XorShift {
    pub fn new(seed: u32) -> Self {
        // zero is a fixed point of the generator
        Self(if seed == 0 { 0x9e37_79b9 } else { seed })
    }

    pub fn next_u32(&mut self) -> u32 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.0 = x;
        x
    }

    pub fn below(&mut self, bound: u32) -> u32 {
        self.next_u32() % bound
    }
}

pub fn random_set(seed: u32, count: usize) -> Vec<u32> {
    let mut rng = XorShift::new(seed);
    (0 .. count).map(|_| rng.next_u32()).collect()
}

pub fn must_sorted(v: &[u32]) {
    let res = v.iter().enumerate().skip(1).find(|(i, e)| e < &&v[i - 1]);
    if let Some((index, e)) = res {
        assert!(false, "{} > {}. Index = {}", v[index - 1], e, index);
    }
}
