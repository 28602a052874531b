#[derive(clap::Parser, Debug)]
#[command(name = "layout-report", version, about = "Compares columnar and interleaved storage of pairs", long_about = None)]
pub struct Arguments {
    /// Number of pairs to store in each container
    #[arg(long, default_value_t = 1000)]
    pub count: usize,

    /// Element layout to measure
    #[arg(long, value_enum, default_value = "all")]
    pub layout: Layout,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layout {
    #[value(name = "u8-u64")]
    U8U64,

    #[value(name = "u16-f64")]
    U16F64,

    #[value(name = "u32-u8")]
    U32U8,

    #[value(name = "f32-f32")]
    F32F32,

    /// Every layout above
    All,
}

impl Layout {
    pub const SINGLE: [Self; 4] = [Self::U8U64, Self::U16F64, Self::U32U8, Self::F32F32];
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::{Arguments, Layout};

    #[test]
    fn defaults() {
        let arguments = Arguments::try_parse_from(["layout-report"]).expect("no arguments are required");

        assert_eq!(arguments.count, 1000);
        assert_eq!(arguments.layout, Layout::All);
    }

    #[test]
    fn explicit_layout() {
        let arguments =
            Arguments::try_parse_from(["layout-report", "--count", "12", "--layout", "u16-f64"])
                .expect("arguments are valid");

        assert_eq!(arguments.count, 12);
        assert_eq!(arguments.layout, Layout::U16F64);
    }

    #[test]
    fn unknown_layout() {
        assert!(Arguments::try_parse_from(["layout-report", "--layout", "u128-u8"]).is_err());
    }
}
