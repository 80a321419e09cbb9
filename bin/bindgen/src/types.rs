//! Solidity type mapping.

use crate::abi::Param;
use eyre::{bail, Result};

const PRIMITIVE_WIDTHS: [usize; 5] = [8, 16, 32, 64, 128];

fn bits(base: &str, prefix: &str) -> Result<Option<usize>> {
    let Some(width) = base.strip_prefix(prefix) else {
        return Ok(None);
    };
    if width.is_empty() {
        return Ok(Some(256));
    }
    match width.parse::<usize>() {
        Ok(bits) if bits % 8 == 0 && (8..=256).contains(&bits) => Ok(Some(bits)),
        _ => bail!("invalid type `{base}`"),
    }
}

fn fixed_bytes(base: &str) -> Result<Option<usize>> {
    let Some(len) = base.strip_prefix("bytes").filter(|len| !len.is_empty()) else {
        return Ok(None);
    };
    match len.parse::<usize>() {
        Ok(len) if (1..=32).contains(&len) => Ok(Some(len)),
        _ => bail!("invalid type `{base}`"),
    }
}

fn uint_rust(bits: usize) -> String {
    match bits {
        256 => "alloy_primitives::U256".to_string(),
        b if PRIMITIVE_WIDTHS.contains(&b) => format!("u{b}"),
        b => format!("alloy_primitives::Uint<{b}, {}>", b.div_ceil(64)),
    }
}

fn int_rust(bits: usize) -> String {
    match bits {
        256 => "alloy_primitives::I256".to_string(),
        b if PRIMITIVE_WIDTHS.contains(&b) => format!("i{b}"),
        b => format!("alloy_primitives::Signed<{b}, {}>", b.div_ceil(64)),
    }
}

/// Array dimensions of a type suffix, innermost first. `None` is a dynamic
/// dimension.
fn dimensions(suffix: &str) -> Result<Vec<Option<usize>>> {
    if suffix.is_empty() {
        return Ok(Vec::new());
    }
    let Some(inner) = suffix.strip_prefix('[').and_then(|s| s.strip_suffix(']')) else {
        bail!("invalid array suffix `{suffix}`");
    };

    inner
        .split("][")
        .map(|dim| match dim {
            "" => Ok(None),
            len => len
                .parse()
                .map(Some)
                .map_err(|_| eyre::eyre!("invalid array length `{len}`")),
        })
        .collect()
}

fn wrap_arrays(
    param: &Param,
    base: String,
    dynamic: impl Fn(&str) -> String,
    fixed: impl Fn(&str, usize) -> String,
) -> Result<String> {
    let (_, suffix) = param.split_array();
    dimensions(suffix)?
        .into_iter()
        .try_fold(base, |inner, dim| {
            Ok(match dim {
                None => dynamic(&inner),
                Some(len) => fixed(&inner, len),
            })
        })
}

/// Rust type of a value of `param`, as produced by `sol!`.
pub fn rust_type(param: &Param, interface: &str) -> Result<String> {
    let (base, _) = param.split_array();
    let base = match base {
        "address" => "Address".to_string(),
        "bool" => "bool".to_string(),
        "string" => "String".to_string(),
        "bytes" => "alloy_primitives::Bytes".to_string(),
        "bytes32" => "alloy_primitives::B256".to_string(),
        "tuple" => format!("{interface}::{}", param.struct_name()?),
        other => {
            if let Some(len) = fixed_bytes(other)? {
                format!("alloy_primitives::FixedBytes<{len}>")
            } else if let Some(bits) = bits(other, "uint")? {
                uint_rust(bits)
            } else if let Some(bits) = bits(other, "int")? {
                int_rust(bits)
            } else {
                bail!("unsupported type `{}`", param.ty);
            }
        }
    };

    wrap_arrays(
        param,
        base,
        |inner| format!("Vec<{inner}>"),
        |inner, len| format!("[{inner}; {len}]"),
    )
}

/// `alloy_sol_types::sol_data` type encoding `param`.
pub fn sol_data_type(param: &Param, interface: &str) -> Result<String> {
    let (base, _) = param.split_array();
    let base = match base {
        "address" => "alloy_sol_types::sol_data::Address".to_string(),
        "bool" => "alloy_sol_types::sol_data::Bool".to_string(),
        "string" => "alloy_sol_types::sol_data::String".to_string(),
        "bytes" => "alloy_sol_types::sol_data::Bytes".to_string(),
        "tuple" => format!("{interface}::{}", param.struct_name()?),
        other => {
            if let Some(len) = fixed_bytes(other)? {
                format!("alloy_sol_types::sol_data::FixedBytes<{len}>")
            } else if let Some(bits) = bits(other, "uint")? {
                format!("alloy_sol_types::sol_data::Uint<{bits}>")
            } else if let Some(bits) = bits(other, "int")? {
                format!("alloy_sol_types::sol_data::Int<{bits}>")
            } else {
                bail!("unsupported type `{}`", param.ty);
            }
        }
    };

    wrap_arrays(
        param,
        base,
        |inner| format!("alloy_sol_types::sol_data::Array<{inner}>"),
        |inner, len| format!("alloy_sol_types::sol_data::FixedArray<{inner}, {len}>"),
    )
}

/// Rust type accepted when filtering on an indexed `param`.
///
/// Reference types and odd-width integers are matched by their raw topic.
pub fn topic_type(param: &Param, interface: &str) -> Result<String> {
    let (base, suffix) = param.split_array();
    let by_value = suffix.is_empty()
        && match base {
            "address" | "bool" | "string" | "bytes" => true,
            other => {
                fixed_bytes(other)?.is_some()
                    || bits(other, "uint")?
                        .or(bits(other, "int")?)
                        .is_some_and(|b| b == 256 || PRIMITIVE_WIDTHS.contains(&b))
            }
        };

    if by_value {
        rust_type(param, interface)
    } else {
        Ok("alloy_primitives::B256".to_string())
    }
}

/// Type as declared inside the `sol!` interface: tuples by struct name.
pub fn sol_decl(param: &Param) -> Result<String> {
    let (base, suffix) = param.split_array();
    if base == "tuple" {
        Ok(format!("{}{suffix}", param.struct_name()?))
    } else {
        Ok(param.ty.clone())
    }
}

/// Canonical ABI type, tuples spelled out by their components.
pub fn canonical(param: &Param) -> String {
    let (base, suffix) = param.split_array();
    if base == "tuple" {
        let inner: Vec<_> = param.components.iter().map(canonical).collect();
        format!("({}){suffix}", inner.join(","))
    } else {
        param.ty.clone()
    }
}

/// Whether `param` needs a data location in a Solidity declaration.
pub fn is_reference(param: &Param) -> bool {
    let (base, suffix) = param.split_array();
    !suffix.is_empty() || matches!(base, "string" | "bytes" | "tuple")
}
