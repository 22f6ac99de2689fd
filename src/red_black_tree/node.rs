use crate::entry::Entry;
use crate::red_black_tree::tree;
use std::mem;

/// An enum representing the color of the link from a node's parent to the node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    Red,
    Black,
}

impl Color {
    pub fn flip(self) -> Color {
        match self {
            Color::Red => Color::Black,
            Color::Black => Color::Red,
        }
    }
}

/// A struct representing an internal node of a red black tree.
pub struct Node<T, U> {
    pub entry: Entry<T, U>,
    pub color: Color,
    pub size: usize,
    pub left: tree::Tree<T, U>,
    pub right: tree::Tree<T, U>,
}

impl<T, U> Node<T, U> {
    pub fn new(key: T, value: U) -> Self {
        Node {
            entry: Entry { key, value },
            color: Color::Red,
            size: 1,
            left: None,
            right: None,
        }
    }

    pub fn update(&mut self) {
        let Node {
            ref mut size,
            ref left,
            ref right,
            ..
        } = self;
        *size = tree::size(left) + tree::size(right) + 1;
    }

    pub fn flip_colors(&mut self) {
        self.color = self.color.flip();
        if let Some(ref mut child) = self.left {
            child.color = child.color.flip();
        }
        if let Some(ref mut child) = self.right {
            child.color = child.color.flip();
        }
    }

    // The right child moves up into this slot, inherits this node's color, and the old node
    // becomes its red left child.
    pub fn rotate_left(&mut self) {
        let mut child = self
            .right
            .take()
            .expect("Expected right child node to be `Some`.");
        self.right = child.left.take();
        mem::swap(&mut *child, self);
        self.color = child.color;
        child.color = Color::Red;
        child.update();
        self.left = Some(child);
        self.update();
    }

    pub fn rotate_right(&mut self) {
        let mut child = self
            .left
            .take()
            .expect("Expected left child node to be `Some`.");
        self.left = child.right.take();
        mem::swap(&mut *child, self);
        self.color = child.color;
        child.color = Color::Red;
        child.update();
        self.right = Some(child);
        self.update();
    }

    fn is_left_left_red(&self) -> bool {
        match self.left {
            Some(ref child) => child.color == Color::Red && tree::is_red(&child.left),
            None => false,
        }
    }

    /// Restores the local 2-3 shape of the subtree rooted at this node and recomputes its size.
    /// The three fix-ups are checked in order and are not mutually exclusive.
    pub fn balance(&mut self) {
        if tree::is_red(&self.right) && !tree::is_red(&self.left) {
            self.rotate_left();
        }

        if self.is_left_left_red() {
            self.rotate_right();
        }

        if tree::is_red(&self.left) && tree::is_red(&self.right) {
            self.flip_colors();
        }

        self.update();
    }

    /// Assuming this node is red and both its left child and its left child's left child are
    /// black, makes the left child or one of its children red.
    pub fn move_red_left(&mut self) {
        self.flip_colors();
        let should_rotate = match self.right {
            Some(ref child) => tree::is_red(&child.left),
            None => false,
        };
        if should_rotate {
            if let Some(ref mut child) = self.right {
                child.rotate_right();
            }
            self.rotate_left();
            self.flip_colors();
        }
    }

    /// Assuming this node is red and both its right child and its right child's left child are
    /// black, makes the right child or one of its children red.
    pub fn move_red_right(&mut self) {
        self.flip_colors();
        if self.is_left_left_red() {
            self.rotate_right();
            self.flip_colors();
        }
    }
}
