use crate::functions::engineering::{base, bitwise, FixedBase};
use crate::functions::{FunctionContext, FunctionSpec};
use crate::value::{ErrorKind, Value};

fn optional_arg(args: &[Value], idx: usize) -> Option<&Value> {
    args.get(idx)
}

fn required_arg(args: &[Value], idx: usize) -> Result<&Value, ErrorKind> {
    args.get(idx).ok_or(ErrorKind::Value)
}

fn to_decimal(args: &[Value], radix: FixedBase) -> Value {
    required_arg(args, 0)
        .and_then(|value| base::decode(value, radix))
        .into()
}

fn from_decimal(ctx: &dyn FunctionContext, args: &[Value], radix: FixedBase) -> Value {
    required_arg(args, 0)
        .and_then(|value| {
            base::encode_with_settings(value, radix, optional_arg(args, 1), ctx.settings())
        })
        .into()
}

fn between_bases(
    ctx: &dyn FunctionContext,
    args: &[Value],
    src: FixedBase,
    dst: FixedBase,
) -> Value {
    required_arg(args, 0)
        .and_then(|value| {
            base::convert_with_places(value, src, dst, optional_arg(args, 1), ctx.settings())
        })
        .into()
}

fn binary_op(args: &[Value], op: fn(&Value, &Value) -> Result<u64, ErrorKind>) -> Value {
    let apply = || op(required_arg(args, 0)?, required_arg(args, 1)?);
    apply().into()
}

inventory::submit! {
    FunctionSpec {
        name: "BIN2DEC",
        min_args: 1,
        max_args: 1,
        implementation: bin2dec_fn,
    }
}

fn bin2dec_fn(_ctx: &dyn FunctionContext, args: &[Value]) -> Value {
    to_decimal(args, FixedBase::Bin)
}

inventory::submit! {
    FunctionSpec {
        name: "OCT2DEC",
        min_args: 1,
        max_args: 1,
        implementation: oct2dec_fn,
    }
}

fn oct2dec_fn(_ctx: &dyn FunctionContext, args: &[Value]) -> Value {
    to_decimal(args, FixedBase::Oct)
}

inventory::submit! {
    FunctionSpec {
        name: "HEX2DEC",
        min_args: 1,
        max_args: 1,
        implementation: hex2dec_fn,
    }
}

fn hex2dec_fn(_ctx: &dyn FunctionContext, args: &[Value]) -> Value {
    to_decimal(args, FixedBase::Hex)
}

inventory::submit! {
    FunctionSpec {
        name: "DEC2BIN",
        min_args: 1,
        max_args: 2,
        implementation: dec2bin_fn,
    }
}

fn dec2bin_fn(ctx: &dyn FunctionContext, args: &[Value]) -> Value {
    from_decimal(ctx, args, FixedBase::Bin)
}

inventory::submit! {
    FunctionSpec {
        name: "DEC2OCT",
        min_args: 1,
        max_args: 2,
        implementation: dec2oct_fn,
    }
}

fn dec2oct_fn(ctx: &dyn FunctionContext, args: &[Value]) -> Value {
    from_decimal(ctx, args, FixedBase::Oct)
}

inventory::submit! {
    FunctionSpec {
        name: "DEC2HEX",
        min_args: 1,
        max_args: 2,
        implementation: dec2hex_fn,
    }
}

fn dec2hex_fn(ctx: &dyn FunctionContext, args: &[Value]) -> Value {
    from_decimal(ctx, args, FixedBase::Hex)
}

inventory::submit! {
    FunctionSpec {
        name: "BIN2OCT",
        min_args: 1,
        max_args: 2,
        implementation: bin2oct_fn,
    }
}

fn bin2oct_fn(ctx: &dyn FunctionContext, args: &[Value]) -> Value {
    between_bases(ctx, args, FixedBase::Bin, FixedBase::Oct)
}

inventory::submit! {
    FunctionSpec {
        name: "BIN2HEX",
        min_args: 1,
        max_args: 2,
        implementation: bin2hex_fn,
    }
}

fn bin2hex_fn(ctx: &dyn FunctionContext, args: &[Value]) -> Value {
    between_bases(ctx, args, FixedBase::Bin, FixedBase::Hex)
}

inventory::submit! {
    FunctionSpec {
        name: "OCT2BIN",
        min_args: 1,
        max_args: 2,
        implementation: oct2bin_fn,
    }
}

fn oct2bin_fn(ctx: &dyn FunctionContext, args: &[Value]) -> Value {
    between_bases(ctx, args, FixedBase::Oct, FixedBase::Bin)
}

inventory::submit! {
    FunctionSpec {
        name: "OCT2HEX",
        min_args: 1,
        max_args: 2,
        implementation: oct2hex_fn,
    }
}

fn oct2hex_fn(ctx: &dyn FunctionContext, args: &[Value]) -> Value {
    between_bases(ctx, args, FixedBase::Oct, FixedBase::Hex)
}

inventory::submit! {
    FunctionSpec {
        name: "HEX2BIN",
        min_args: 1,
        max_args: 2,
        implementation: hex2bin_fn,
    }
}

fn hex2bin_fn(ctx: &dyn FunctionContext, args: &[Value]) -> Value {
    between_bases(ctx, args, FixedBase::Hex, FixedBase::Bin)
}

inventory::submit! {
    FunctionSpec {
        name: "HEX2OCT",
        min_args: 1,
        max_args: 2,
        implementation: hex2oct_fn,
    }
}

fn hex2oct_fn(ctx: &dyn FunctionContext, args: &[Value]) -> Value {
    between_bases(ctx, args, FixedBase::Hex, FixedBase::Oct)
}

inventory::submit! {
    FunctionSpec {
        name: "BITAND",
        min_args: 2,
        max_args: 2,
        implementation: bitand_fn,
    }
}

fn bitand_fn(_ctx: &dyn FunctionContext, args: &[Value]) -> Value {
    binary_op(args, bitwise::bit_and)
}

inventory::submit! {
    FunctionSpec {
        name: "BITOR",
        min_args: 2,
        max_args: 2,
        implementation: bitor_fn,
    }
}

fn bitor_fn(_ctx: &dyn FunctionContext, args: &[Value]) -> Value {
    binary_op(args, bitwise::bit_or)
}

inventory::submit! {
    FunctionSpec {
        name: "BITXOR",
        min_args: 2,
        max_args: 2,
        implementation: bitxor_fn,
    }
}

fn bitxor_fn(_ctx: &dyn FunctionContext, args: &[Value]) -> Value {
    binary_op(args, bitwise::bit_xor)
}

inventory::submit! {
    FunctionSpec {
        name: "BITLSHIFT",
        min_args: 2,
        max_args: 2,
        implementation: bitlshift_fn,
    }
}

fn bitlshift_fn(_ctx: &dyn FunctionContext, args: &[Value]) -> Value {
    binary_op(args, bitwise::bit_lshift)
}

inventory::submit! {
    FunctionSpec {
        name: "BITRSHIFT",
        min_args: 2,
        max_args: 2,
        implementation: bitrshift_fn,
    }
}

fn bitrshift_fn(_ctx: &dyn FunctionContext, args: &[Value]) -> Value {
    binary_op(args, bitwise::bit_rshift)
}

// On wasm targets, `inventory` registrations can be dropped by the linker if the object file
// contains no otherwise-referenced symbols. The registry calls this before first use so the
// module (and its `inventory::submit!` entries) are retained.
#[cfg(target_arch = "wasm32")]
pub(super) fn __force_link() {}
