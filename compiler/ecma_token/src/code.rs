//! Token codes shared by the scanner, parser, and interpreter.

use std::fmt;

use crate::UnknownToken;

/// Integer code for a lexical token or parse-tree node tag.
///
/// Codes are densely packed in `ERROR..=LAST_TOKEN`, with categories laid out
/// in contiguous ranges:
///
/// | Range   | Category                                   |
/// |---------|--------------------------------------------|
/// | -1..1   | Stream control (`ERROR`, `EOF`, `EOL`)     |
/// | 2-80    | Interpreter bytecodes                      |
/// | 81-89   | Punctuation                                |
/// | 90-101  | Assignment operators                       |
/// | 102-128 | Operators and statement keywords           |
/// | 129-142 | Parse-tree only                            |
/// | 143-148 | XML extensions                             |
/// | 149-162 | Optimizer tokens and later keywords        |
/// | 163     | `LAST_TOKEN` sentinel                      |
///
/// Absolute values are only meaningful inside this crate. Consumers compare
/// against the named constants and use the range predicates
/// ([`is_bytecode`](Self::is_bytecode), [`is_assign`](Self::is_assign))
/// instead of hardcoding numbers.
///
/// `TokenCode` wraps any `i32` so that externally supplied values can be
/// probed with [`is_valid`](Self::is_valid). Use `TryFrom<i32>` to admit only
/// codes in range.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "i32", into = "i32"))]
#[repr(transparent)]
pub struct TokenCode(i32);

impl TokenCode {
    // === Stream control ===

    /// Scanner error; the only code below `EOF`.
    pub const ERROR: TokenCode = TokenCode(-1);
    /// End of input (not the end-of-input character).
    pub const EOF: TokenCode = TokenCode(0);
    /// End of line.
    pub const EOL: TokenCode = TokenCode(1);

    // === Interpreter bytecodes (2-80) ===

    pub const ENTERWITH: TokenCode = TokenCode(2);
    pub const LEAVEWITH: TokenCode = TokenCode(3);
    pub const RETURN: TokenCode = TokenCode(4);
    pub const GOTO: TokenCode = TokenCode(5);
    pub const IFEQ: TokenCode = TokenCode(6);
    pub const IFNE: TokenCode = TokenCode(7);
    pub const SETNAME: TokenCode = TokenCode(8);
    pub const BITOR: TokenCode = TokenCode(9);
    pub const BITXOR: TokenCode = TokenCode(10);
    pub const BITAND: TokenCode = TokenCode(11);
    pub const EQ: TokenCode = TokenCode(12);
    pub const NE: TokenCode = TokenCode(13);
    pub const LT: TokenCode = TokenCode(14);
    pub const LE: TokenCode = TokenCode(15);
    pub const GT: TokenCode = TokenCode(16);
    pub const GE: TokenCode = TokenCode(17);
    pub const LSH: TokenCode = TokenCode(18);
    pub const RSH: TokenCode = TokenCode(19);
    pub const URSH: TokenCode = TokenCode(20);
    pub const ADD: TokenCode = TokenCode(21);
    pub const SUB: TokenCode = TokenCode(22);
    pub const MUL: TokenCode = TokenCode(23);
    pub const DIV: TokenCode = TokenCode(24);
    pub const MOD: TokenCode = TokenCode(25);
    pub const NOT: TokenCode = TokenCode(26);
    pub const BITNOT: TokenCode = TokenCode(27);
    pub const POS: TokenCode = TokenCode(28);
    pub const NEG: TokenCode = TokenCode(29);
    pub const NEW: TokenCode = TokenCode(30);
    /// `delete` operator.
    pub const DELPROP: TokenCode = TokenCode(31);
    pub const TYPEOF: TokenCode = TokenCode(32);
    pub const GETPROP: TokenCode = TokenCode(33);
    pub const GETPROPNOWARN: TokenCode = TokenCode(34);
    pub const SETPROP: TokenCode = TokenCode(35);
    pub const GETELEM: TokenCode = TokenCode(36);
    pub const SETELEM: TokenCode = TokenCode(37);
    pub const CALL: TokenCode = TokenCode(38);
    pub const NAME: TokenCode = TokenCode(39);
    pub const NUMBER: TokenCode = TokenCode(40);
    pub const STRING: TokenCode = TokenCode(41);
    pub const NULL: TokenCode = TokenCode(42);
    pub const THIS: TokenCode = TokenCode(43);
    pub const FALSE: TokenCode = TokenCode(44);
    pub const TRUE: TokenCode = TokenCode(45);
    /// Strict equality (`===`).
    pub const SHEQ: TokenCode = TokenCode(46);
    /// Strict inequality (`!==`).
    pub const SHNE: TokenCode = TokenCode(47);
    pub const REGEXP: TokenCode = TokenCode(48);
    pub const BINDNAME: TokenCode = TokenCode(49);
    pub const THROW: TokenCode = TokenCode(50);
    /// Rethrow of a caught exception from a conditional `catch (e if ...)`.
    pub const RETHROW: TokenCode = TokenCode(51);
    pub const IN: TokenCode = TokenCode(52);
    pub const INSTANCEOF: TokenCode = TokenCode(53);
    pub const LOCAL_LOAD: TokenCode = TokenCode(54);
    pub const GETVAR: TokenCode = TokenCode(55);
    pub const SETVAR: TokenCode = TokenCode(56);
    pub const CATCH_SCOPE: TokenCode = TokenCode(57);
    pub const ENUM_INIT_KEYS: TokenCode = TokenCode(58);
    pub const ENUM_INIT_VALUES: TokenCode = TokenCode(59);
    pub const ENUM_INIT_ARRAY: TokenCode = TokenCode(60);
    pub const ENUM_NEXT: TokenCode = TokenCode(61);
    pub const ENUM_ID: TokenCode = TokenCode(62);
    pub const THISFN: TokenCode = TokenCode(63);
    /// Return a previously stored result.
    pub const RETURN_RESULT: TokenCode = TokenCode(64);
    pub const ARRAYLIT: TokenCode = TokenCode(65);
    pub const OBJECTLIT: TokenCode = TokenCode(66);
    /// `*reference`
    pub const GET_REF: TokenCode = TokenCode(67);
    /// `*reference = something`
    pub const SET_REF: TokenCode = TokenCode(68);
    /// `delete reference`
    pub const DEL_REF: TokenCode = TokenCode(69);
    /// `f(args) = something` or `f(args)++`
    pub const REF_CALL: TokenCode = TokenCode(70);
    /// Reference to a special property such as `__proto__`.
    pub const REF_SPECIAL: TokenCode = TokenCode(71);
    /// `yield` pseudo keyword.
    pub const YIELD: TokenCode = TokenCode(72);
    pub const STRICT_SETNAME: TokenCode = TokenCode(73);
    /// `default xml namespace =`
    pub const DEFAULTNAMESPACE: TokenCode = TokenCode(74);
    pub const ESCXMLATTR: TokenCode = TokenCode(75);
    pub const ESCXMLTEXT: TokenCode = TokenCode(76);
    /// Reference for `x.@y`, `x..y`.
    pub const REF_MEMBER: TokenCode = TokenCode(77);
    /// Reference for `x.ns::y`, `x..ns::y`.
    pub const REF_NS_MEMBER: TokenCode = TokenCode(78);
    /// Reference for `@y`, `@[y]`.
    pub const REF_NAME: TokenCode = TokenCode(79);
    /// Reference for `ns::y`, `@ns::y`, `@ns::[y]`.
    pub const REF_NS_NAME: TokenCode = TokenCode(80);

    // === Punctuation (81-89) ===

    pub const TRY: TokenCode = TokenCode(81);
    /// `;`
    pub const SEMI: TokenCode = TokenCode(82);
    /// `[`
    pub const LB: TokenCode = TokenCode(83);
    /// `]`
    pub const RB: TokenCode = TokenCode(84);
    /// `{`
    pub const LC: TokenCode = TokenCode(85);
    /// `}`
    pub const RC: TokenCode = TokenCode(86);
    /// `(`
    pub const LP: TokenCode = TokenCode(87);
    /// `)`
    pub const RP: TokenCode = TokenCode(88);
    /// Comma operator.
    pub const COMMA: TokenCode = TokenCode(89);

    // === Assignment operators (90-101) ===

    pub const ASSIGN: TokenCode = TokenCode(90); // =
    pub const ASSIGN_BITOR: TokenCode = TokenCode(91); // |=
    pub const ASSIGN_BITXOR: TokenCode = TokenCode(92); // ^=
    pub const ASSIGN_BITAND: TokenCode = TokenCode(93); // &=
    pub const ASSIGN_LSH: TokenCode = TokenCode(94); // <<=
    pub const ASSIGN_RSH: TokenCode = TokenCode(95); // >>=
    pub const ASSIGN_URSH: TokenCode = TokenCode(96); // >>>=
    pub const ASSIGN_ADD: TokenCode = TokenCode(97); // +=
    pub const ASSIGN_SUB: TokenCode = TokenCode(98); // -=
    pub const ASSIGN_MUL: TokenCode = TokenCode(99); // *=
    pub const ASSIGN_DIV: TokenCode = TokenCode(100); // /=
    pub const ASSIGN_MOD: TokenCode = TokenCode(101); // %=

    // === Operators and statement keywords (102-128) ===

    /// Conditional `?:`.
    pub const HOOK: TokenCode = TokenCode(102);
    pub const COLON: TokenCode = TokenCode(103);
    pub const OR: TokenCode = TokenCode(104); // ||
    pub const AND: TokenCode = TokenCode(105); // &&
    pub const INC: TokenCode = TokenCode(106); // ++
    pub const DEC: TokenCode = TokenCode(107); // --
    pub const DOT: TokenCode = TokenCode(108);
    pub const FUNCTION: TokenCode = TokenCode(109);
    pub const EXPORT: TokenCode = TokenCode(110);
    pub const IMPORT: TokenCode = TokenCode(111);
    pub const IF: TokenCode = TokenCode(112);
    pub const ELSE: TokenCode = TokenCode(113);
    pub const SWITCH: TokenCode = TokenCode(114);
    pub const CASE: TokenCode = TokenCode(115);
    pub const DEFAULT: TokenCode = TokenCode(116);
    pub const WHILE: TokenCode = TokenCode(117);
    pub const DO: TokenCode = TokenCode(118);
    pub const FOR: TokenCode = TokenCode(119);
    pub const BREAK: TokenCode = TokenCode(120);
    pub const CONTINUE: TokenCode = TokenCode(121);
    pub const VAR: TokenCode = TokenCode(122);
    pub const WITH: TokenCode = TokenCode(123);
    pub const CATCH: TokenCode = TokenCode(124);
    pub const FINALLY: TokenCode = TokenCode(125);
    pub const VOID: TokenCode = TokenCode(126);
    /// Future-reserved words (`class`, `enum`, `super`, ...).
    pub const RESERVED: TokenCode = TokenCode(127);
    pub const EMPTY: TokenCode = TokenCode(128);

    // === Parse-tree only (129-142), never returned by the scanner ===

    /// Statement block.
    pub const BLOCK: TokenCode = TokenCode(129);
    pub const LABEL: TokenCode = TokenCode(130);
    pub const TARGET: TokenCode = TokenCode(131);
    pub const LOOP: TokenCode = TokenCode(132);
    /// Expression statement inside a function.
    pub const EXPR_VOID: TokenCode = TokenCode(133);
    /// Expression statement at script level.
    pub const EXPR_RESULT: TokenCode = TokenCode(134);
    pub const JSR: TokenCode = TokenCode(135);
    /// Top-level node for a whole script.
    pub const SCRIPT: TokenCode = TokenCode(136);
    /// `typeof` applied to a simple name.
    pub const TYPEOFNAME: TokenCode = TokenCode(137);
    pub const USE_STACK: TokenCode = TokenCode(138);
    /// `x.y op= something`
    pub const SETPROP_OP: TokenCode = TokenCode(139);
    /// `x[y] op= something`
    pub const SETELEM_OP: TokenCode = TokenCode(140);
    pub const LOCAL_BLOCK: TokenCode = TokenCode(141);
    /// `*reference op= something`
    pub const SET_REF_OP: TokenCode = TokenCode(142);

    // === XML extensions (143-148) ===

    /// `..` member operator.
    pub const DOTDOT: TokenCode = TokenCode(143);
    /// `namespace::name`
    pub const COLONCOLON: TokenCode = TokenCode(144);
    pub const XML: TokenCode = TokenCode(145);
    /// `.()` filtering predicate, as in `x.emps.emp.(name == "terry")`.
    pub const DOTQUERY: TokenCode = TokenCode(146);
    /// `@`
    pub const XMLATTR: TokenCode = TokenCode(147);
    pub const XMLEND: TokenCode = TokenCode(148);

    // === Optimizer tokens and later keywords (149-162) ===

    pub const TO_OBJECT: TokenCode = TokenCode(149);
    pub const TO_DOUBLE: TokenCode = TokenCode(150);
    /// `get` pseudo keyword.
    pub const GET: TokenCode = TokenCode(151);
    /// `set` pseudo keyword.
    pub const SET: TokenCode = TokenCode(152);
    /// `let` pseudo keyword.
    pub const LET: TokenCode = TokenCode(153);
    pub const CONST: TokenCode = TokenCode(154);
    pub const SETCONST: TokenCode = TokenCode(155);
    pub const SETCONSTVAR: TokenCode = TokenCode(156);
    /// Array comprehension.
    pub const ARRAYCOMP: TokenCode = TokenCode(157);
    pub const LETEXPR: TokenCode = TokenCode(158);
    pub const WITHEXPR: TokenCode = TokenCode(159);
    pub const DEBUGGER: TokenCode = TokenCode(160);
    pub const COMMENT: TokenCode = TokenCode(161);
    /// Generator expression.
    pub const GENEXPR: TokenCode = TokenCode(162);

    /// Upper bound of the code space. In range, but never emitted and unnamed.
    pub const LAST_TOKEN: TokenCode = TokenCode(163);

    // === Range markers ===

    /// First code an interpreter may reuse as an opcode.
    pub const FIRST_BYTECODE_TOKEN: TokenCode = Self::ENTERWITH;
    /// Last code an interpreter may reuse as an opcode.
    pub const LAST_BYTECODE_TOKEN: TokenCode = Self::REF_NS_NAME;
    /// First assignment operator.
    pub const FIRST_ASSIGN: TokenCode = Self::ASSIGN;
    /// Last assignment operator.
    pub const LAST_ASSIGN: TokenCode = Self::ASSIGN_MOD;

    /// Number of codes in `ERROR..=LAST_TOKEN`; the length of dense lookup tables.
    pub const COUNT: usize = Self::LAST_TOKEN.0.abs_diff(Self::ERROR.0) as usize + 1;

    /// Wrap a raw integer without validating it.
    #[inline]
    pub const fn from_raw(raw: i32) -> Self {
        TokenCode(raw)
    }

    /// Get the raw integer value.
    #[inline]
    pub const fn raw(self) -> i32 {
        self.0
    }

    /// Check if this code lies in `ERROR..=LAST_TOKEN`.
    #[inline]
    pub const fn is_valid(self) -> bool {
        self.0 >= Self::ERROR.0 && self.0 <= Self::LAST_TOKEN.0
    }

    /// Check if an interpreter may treat this code as an opcode.
    #[inline]
    pub const fn is_bytecode(self) -> bool {
        self.0 >= Self::FIRST_BYTECODE_TOKEN.0 && self.0 <= Self::LAST_BYTECODE_TOKEN.0
    }

    /// Check if this code is a simple or compound assignment operator.
    #[inline]
    pub const fn is_assign(self) -> bool {
        self.0 >= Self::FIRST_ASSIGN.0 && self.0 <= Self::LAST_ASSIGN.0
    }

    /// Position of this code in a dense table of [`COUNT`](Self::COUNT) slots.
    ///
    /// Returns `None` for codes outside `ERROR..=LAST_TOKEN`.
    #[inline]
    pub(crate) const fn index(self) -> Option<usize> {
        if self.is_valid() {
            Some(self.0.abs_diff(Self::ERROR.0) as usize)
        } else {
            None
        }
    }

    /// Iterate over every code in `ERROR..=LAST_TOKEN`, in ascending order.
    pub fn all() -> impl DoubleEndedIterator<Item = TokenCode> {
        (Self::ERROR.0..=Self::LAST_TOKEN.0).map(TokenCode)
    }
}

// Layout invariants. A reordering that breaks any of these fails the build.
const _: () = {
    assert!(TokenCode::ERROR.0 < TokenCode::EOF.0);
    assert!(TokenCode::EOF.0 < TokenCode::FIRST_BYTECODE_TOKEN.0);
    assert!(TokenCode::FIRST_BYTECODE_TOKEN.0 <= TokenCode::LAST_BYTECODE_TOKEN.0);
    assert!(TokenCode::LAST_BYTECODE_TOKEN.0 < TokenCode::FIRST_ASSIGN.0);
    assert!(TokenCode::FIRST_ASSIGN.0 <= TokenCode::LAST_ASSIGN.0);
    assert!(TokenCode::LAST_ASSIGN.0 < TokenCode::LAST_TOKEN.0);
};

impl TryFrom<i32> for TokenCode {
    type Error = UnknownToken;

    fn try_from(raw: i32) -> Result<Self, Self::Error> {
        let code = TokenCode(raw);
        if code.is_valid() {
            Ok(code)
        } else {
            Err(UnknownToken::new(raw))
        }
    }
}

impl From<TokenCode> for i32 {
    #[inline]
    fn from(code: TokenCode) -> i32 {
        code.0
    }
}

impl fmt::Display for TokenCode {
    /// Canonical name when one exists, decimal code otherwise.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match crate::name::lookup(*self) {
            Some(name) => f.write_str(name),
            None => write!(f, "{}", self.0),
        }
    }
}

impl fmt::Debug for TokenCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match crate::name::lookup(*self) {
            Some(name) => write!(f, "{name}({})", self.0),
            None => write!(f, "TokenCode({})", self.0),
        }
    }
}
