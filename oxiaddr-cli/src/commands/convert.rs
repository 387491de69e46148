//! Convert command implementation.

use crate::utils::{Address, InputKind};
use clap::{Args, ValueEnum};
use oxiaddr_core::FormatOptions;
use oxiaddr_ipv6::{Ipv6Address, Ipv6Format, MAX_PREFIX_LENGTH, ReverseZone};

/// Output style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputStyle {
    /// Compressed IPv6 (2001:db8::1)
    Compressed,
    /// Uncompressed IPv6 (2001:db8:0:0:0:0:0:1)
    Uncompressed,
    /// Zero-padded IPv6 (2001:0db8:0000:...)
    Full,
    /// Low 64 bits as 16 hex digits
    Token,
    /// Reverse nibbles under ip6.int.
    RevnibblesInt,
    /// Reverse nibbles under ip6.arpa.
    RevnibblesArpa,
    /// Bitstring label under ip6.arpa.
    Bitstring,
    /// Dotted IPv4 (embedded IPv4 for IPv6 input)
    Ipv4,
    /// Reverse IPv4 under in-addr.arpa.
    Revipv4,
}

/// Conversion options shared by `convert` and `batch`.
#[derive(Debug, Clone, Default, Args)]
pub struct ConvertArgs {
    /// How to interpret the input
    #[arg(short = 'i', long = "in", value_enum, default_value = "auto")]
    pub input_kind: InputKind,

    /// Output style (compressed for IPv6, ipv4 for IPv4 if omitted)
    #[arg(short = 'o', long = "out", value_enum)]
    pub output: Option<OutputStyle>,

    /// Print hex digits in uppercase
    #[arg(short = 'u', long)]
    pub uppercase: bool,

    /// Print only the prefix part
    #[arg(long)]
    pub printprefix: bool,

    /// Print only the suffix part
    #[arg(long)]
    pub printsuffix: bool,

    /// Clear the bits after the prefix length before printing
    #[arg(long)]
    pub maskprefix: bool,

    /// Clear the bits up to the prefix length before printing
    #[arg(long)]
    pub masksuffix: bool,

    /// First bit (1-128) of a partial reverse-nibble rendering
    #[arg(long, value_name = "BIT")]
    pub printstart: Option<u8>,

    /// Last bit (1-128) of a partial reverse-nibble rendering
    #[arg(long, value_name = "BIT")]
    pub printend: Option<u8>,

    /// Reverse the order of dotted labels
    #[arg(long)]
    pub mirrored: bool,

    /// Prefix IPv4 output with IPV4=
    #[arg(long)]
    pub machine_readable: bool,
}

impl ConvertArgs {
    /// Format flags selected on the command line.
    pub fn options(&self) -> FormatOptions {
        let mut options = FormatOptions::DEFAULT;
        if self.uppercase {
            options.remove(FormatOptions::LOWERCASE);
            options.insert(FormatOptions::UPPERCASE);
        }
        options.set(FormatOptions::PRINT_PREFIX, self.printprefix);
        options.set(FormatOptions::PRINT_SUFFIX, self.printsuffix);
        options.set(FormatOptions::PRINT_START, self.printstart.is_some());
        options.set(FormatOptions::PRINT_END, self.printend.is_some());
        options.set(FormatOptions::MIRRORED, self.mirrored);
        options.set(FormatOptions::MACHINE_READABLE, self.machine_readable);
        options
    }
}

pub fn cmd_convert(address: &str, args: &ConvertArgs) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", convert(address, args)?);
    Ok(())
}

/// Parse one address and render it as requested.
pub fn convert(input: &str, args: &ConvertArgs) -> Result<String, Box<dyn std::error::Error>> {
    let options = args.options();

    match Address::parse(input, args.input_kind)? {
        Address::V6(mut addr) => {
            if args.printstart.is_some() || args.printend.is_some() {
                addr.set_bit_range(
                    args.printstart.unwrap_or(1),
                    args.printend.unwrap_or(MAX_PREFIX_LENGTH),
                )?;
            }
            if args.maskprefix {
                addr.mask_prefix();
            }
            if args.masksuffix {
                addr.mask_suffix();
            }
            render_ipv6(&addr, args.output.unwrap_or(OutputStyle::Compressed), options)
        }
        Address::V4(addr) => {
            if args.maskprefix || args.masksuffix {
                return Err("--maskprefix and --masksuffix apply to IPv6 addresses only".into());
            }
            if args.printstart.is_some() || args.printend.is_some() {
                return Err("--printstart and --printend apply to IPv6 addresses only".into());
            }
            let style = args.output.unwrap_or(OutputStyle::Ipv4);
            let dotted = matches!(style, OutputStyle::Ipv4 | OutputStyle::Revipv4);
            if dotted && (args.printprefix || args.printsuffix) {
                return Err("--printprefix and --printsuffix apply to IPv6 output only".into());
            }
            match style {
                OutputStyle::Ipv4 => Ok(addr.to_dotted(options)),
                OutputStyle::Revipv4 => Ok(addr.to_reverse_string(options)?),
                style => render_ipv6(&Ipv6Address::from_ipv4_mapped(&addr), style, options),
            }
        }
    }
}

fn render_ipv6(
    addr: &Ipv6Address,
    style: OutputStyle,
    options: FormatOptions,
) -> Result<String, Box<dyn std::error::Error>> {
    let format = match style {
        OutputStyle::Compressed => Ipv6Format::Compressed,
        OutputStyle::Uncompressed => Ipv6Format::Uncompressed,
        OutputStyle::Full => Ipv6Format::FullUncompressed,
        OutputStyle::Token => Ipv6Format::TokenLsb64,
        OutputStyle::RevnibblesInt => Ipv6Format::ReverseNibble(ReverseZone::Ip6Int),
        OutputStyle::RevnibblesArpa => Ipv6Format::ReverseNibble(ReverseZone::Ip6Arpa),
        OutputStyle::Bitstring => Ipv6Format::Bitstring,
        OutputStyle::Ipv4 | OutputStyle::Revipv4 => {
            let ipv4 = addr
                .embedded_ipv4()
                .ok_or_else(|| format!("{addr} does not carry an IPv4 address"))?;
            return Ok(if style == OutputStyle::Ipv4 {
                ipv4.to_dotted(options)
            } else {
                ipv4.to_reverse_string(options)?
            });
        }
    };
    Ok(addr.format(format, options)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(output: OutputStyle) -> ConvertArgs {
        ConvertArgs {
            output: Some(output),
            ..Default::default()
        }
    }

    #[test]
    fn test_default_styles() {
        let args = ConvertArgs::default();
        assert_eq!(
            convert("2001:0db8:0:0:0:0:0:1", &args).unwrap(),
            "2001:db8::1"
        );
        assert_eq!(convert("192.168.1.1/24", &args).unwrap(), "192.168.1.1/24");
    }

    #[test]
    fn test_ipv6_styles() {
        assert_eq!(
            convert("2001:db8::1", &args(OutputStyle::Full)).unwrap(),
            "2001:0db8:0000:0000:0000:0000:0000:0001"
        );
        assert_eq!(
            convert("3ffe:ffff::/32", &args(OutputStyle::RevnibblesInt)).unwrap(),
            "f.f.f.f.e.f.f.3.ip6.int."
        );
        assert_eq!(
            convert("fe80::210:a4ff:fe01:2345", &args(OutputStyle::Token)).unwrap(),
            "0210a4fffe012345"
        );
    }

    #[test]
    fn test_mask_and_case() {
        let args = ConvertArgs {
            output: Some(OutputStyle::Uncompressed),
            maskprefix: true,
            uppercase: true,
            ..Default::default()
        };
        assert_eq!(
            convert("2001:db8:abcd:1:2:3:4:5/48", &args).unwrap(),
            "2001:DB8:ABCD:0:0:0:0:0/48"
        );
    }

    #[test]
    fn test_partial_reverse() {
        let args = ConvertArgs {
            output: Some(OutputStyle::RevnibblesArpa),
            printstart: Some(17),
            printend: Some(32),
            ..Default::default()
        };
        assert_eq!(convert("2001:db8::1", &args).unwrap(), "8.b.d.0");
    }

    #[test]
    fn test_ipv4_outputs() {
        assert_eq!(
            convert("192.168.1.0/24", &args(OutputStyle::Revipv4)).unwrap(),
            "1.168.192.in-addr.arpa."
        );
        assert_eq!(
            convert("192.0.2.1", &args(OutputStyle::Compressed)).unwrap(),
            "::ffff:192.0.2.1"
        );
        assert_eq!(
            convert("::ffff:10.1.2.3", &args(OutputStyle::Ipv4)).unwrap(),
            "10.1.2.3"
        );
        assert!(convert("2001:db8::1", &args(OutputStyle::Ipv4)).is_err());
    }

    #[test]
    fn test_ipv4_prefix_survives_mapping() {
        assert_eq!(
            convert("192.0.2.0/24", &args(OutputStyle::Compressed)).unwrap(),
            "::ffff:192.0.2.0/120"
        );
        assert_eq!(
            convert("10.1.2.0/24", &args(OutputStyle::Uncompressed)).unwrap(),
            "0:0:0:0:0:ffff:10.1.2.0/120"
        );
    }

    #[test]
    fn test_ipv4_output_rejects_prefix_suffix_selection() {
        for output in [OutputStyle::Ipv4, OutputStyle::Revipv4] {
            let prefix = ConvertArgs {
                printprefix: true,
                ..args(output)
            };
            assert!(convert("10.1.2.3/16", &prefix).is_err());
            let suffix = ConvertArgs {
                printsuffix: true,
                ..args(output)
            };
            assert!(convert("10.1.2.3/16", &suffix).is_err());
        }
        let implicit = ConvertArgs {
            printprefix: true,
            ..Default::default()
        };
        assert!(convert("10.1.2.3/16", &implicit).is_err());
    }

    #[test]
    fn test_ipv4_rejects_ipv6_only_flags() {
        let args = ConvertArgs {
            maskprefix: true,
            ..Default::default()
        };
        assert!(convert("10.0.0.1/8", &args).is_err());
    }
}
