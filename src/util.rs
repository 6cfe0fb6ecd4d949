use crate::error::Error;
use hashbrown::HashMap;

lazy_static! {
    /// Priority of an operator read from the input, before it is pushed on
    /// the operator stack
    pub static ref INFIX_PRIORITY: HashMap<char, u8> = {
        let mut map = HashMap::<char, u8>::new();
        map.insert('^', 4);
        map.insert('*', 2);
        map.insert('/', 2);
        map.insert('%', 2);
        map.insert('+', 1);
        map.insert('-', 1);
        map.insert('(', 5);
        map.shrink_to_fit();
        map
    };

    /// Priority of an operator already sitting on the operator stack.
    ///
    /// `^` is one lower here than in `INFIX_PRIORITY`, so a chain of `^` does
    /// not pop itself and groups to the right. All the other operators have
    /// the same priority in both tables and group to the left.
    pub static ref STACK_PRIORITY: HashMap<char, u8> = {
        let mut map = HashMap::<char, u8>::new();
        map.insert('^', 3);
        map.insert('*', 2);
        map.insert('/', 2);
        map.insert('%', 2);
        map.insert('+', 1);
        map.insert('-', 1);
        map.insert('(', 0);
        map.shrink_to_fit();
        map
    };
}

/// Priority of `op` when it is read from the input
pub fn infix_priority(op: char) -> Result<u8, Error> {
    INFIX_PRIORITY
        .get(&op)
        .copied()
        .ok_or(Error::InvalidOperator(op))
}

/// Priority of `op` when it is on top of the operator stack
pub fn stack_priority(op: char) -> Result<u8, Error> {
    STACK_PRIORITY
        .get(&op)
        .copied()
        .ok_or(Error::InvalidOperator(op))
}
