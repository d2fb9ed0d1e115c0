//! Shunting-yard conversion.

use linum_seq::{LinkedDeque, LinkedStack};
use tracing::trace;

use crate::{ConvertError, Operator, Symbol};

/// Stack entry during one conversion.
///
/// Open parentheses remember where they were so an unclosed one can be
/// reported at its own position once the input runs out.
#[derive(Copy, Clone, Debug)]
enum Pending {
    Operator(Operator),
    OpenParen { position: usize },
}

/// Convert an infix expression to postfix.
///
/// - digits go straight to the output;
/// - an operator first pops every stacked operator of greater or equal
///   precedence (down to the nearest `(`), then is pushed;
/// - `(` is pushed, `)` pops to the output until its `(` is popped;
/// - remaining operators are popped to the output at the end.
///
/// Equal precedence pops, so every operator (including `^`) associates left.
/// The expression is not checked for operator arity: `"3+"` converts to
/// `"3+"`, and the empty expression converts to the empty string.
///
/// ```
/// use linum_postfix::infix_to_postfix;
///
/// assert_eq!(infix_to_postfix("1+2*3").as_deref(), Ok("123*+"));
/// assert_eq!(infix_to_postfix("(1+2)*3").as_deref(), Ok("12+3*"));
/// assert!(infix_to_postfix("3*(2+4").is_err());
/// ```
#[tracing::instrument(level = "debug", skip_all, fields(len = expression.len()))]
pub fn infix_to_postfix(expression: &str) -> Result<String, ConvertError> {
    let symbols: LinkedDeque<char> = expression.chars().collect();
    let mut stack = LinkedStack::new();
    let mut postfix = String::with_capacity(expression.len());

    for (position, &c) in symbols.iter().enumerate() {
        let Some(symbol) = Symbol::classify(c) else {
            return Err(ConvertError::InvalidToken { found: c, position });
        };
        match symbol {
            Symbol::Digit(digit) => postfix.push(digit),
            Symbol::Operator(op) => {
                pop_tighter_operators(&mut stack, op, &mut postfix);
                stack.push(Pending::Operator(op));
            }
            Symbol::OpenParen => stack.push(Pending::OpenParen { position }),
            Symbol::CloseParen => close_group(&mut stack, &mut postfix, position)?,
        }
    }

    while let Some(pending) = stack.pop() {
        match pending {
            Pending::Operator(op) => postfix.push(op.as_char()),
            Pending::OpenParen { position } => return Err(ConvertError::unclosed_open(position)),
        }
    }
    debug_assert!(stack.is_empty());

    Ok(postfix)
}

/// Pop operators that bind at least as tightly as `incoming`, stopping at the
/// bottom of the stack or the innermost open parenthesis.
fn pop_tighter_operators(stack: &mut LinkedStack<Pending>, incoming: Operator, postfix: &mut String) {
    while let Some(&Pending::Operator(top)) = stack.top() {
        if top.precedence() < incoming.precedence() {
            break;
        }
        trace!(%top, %incoming, "pop operator");
        stack.pop();
        postfix.push(top.as_char());
    }
}

/// Handle `)`: flush the group's operators and discard its `(`.
fn close_group(
    stack: &mut LinkedStack<Pending>,
    postfix: &mut String,
    position: usize,
) -> Result<(), ConvertError> {
    loop {
        match stack.pop() {
            Some(Pending::Operator(op)) => postfix.push(op.as_char()),
            Some(Pending::OpenParen { .. }) => return Ok(()),
            None => return Err(ConvertError::unmatched_close(position)),
        }
    }
}
