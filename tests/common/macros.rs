/// Asserts that two floats are within `eps` of each other.
#[macro_export]
macro_rules! assert_close {
    ($left:expr, $right:expr) => {
        $crate::assert_close!($left, $right, 1e-9)
    };
    ($left:expr, $right:expr, $eps:expr) => {{
        let (l, r): (f64, f64) = ($left, $right);
        assert!((l - r).abs() <= $eps, "{} is not within {} of {}", l, $eps, r);
    }};
}

/// Asserts the working potential of a named neuron.
#[macro_export]
macro_rules! assert_voltage {
    ($engine:expr, $name:expr, $expected:expr) => {
        let v = $engine
            .read_voltage($name)
            .expect("Neuron not found in connectome");
        $crate::assert_close!(v, $expected);
    };
}

/// Asserts the incoming signal slot of a named neuron.
#[macro_export]
macro_rules! assert_incoming {
    ($engine:expr, $name:expr, $expected:expr) => {
        let id = $engine
            .connectome()
            .id($name)
            .expect("Neuron not found in connectome");
        $crate::assert_close!($engine.incoming_signal(id), $expected);
    };
}
