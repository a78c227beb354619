use crate::Coords;
use Heading::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Heading {
    Up,
    Down,
    Left,
    Right
}

impl Heading {
    pub const ALL: [Heading; 4] = [Up, Down, Left, Right];

    pub fn opposite(self) -> Self {
        match self {
            Up => Down,
            Down => Up,
            Left => Right,
            Right => Left,
        }
    }

    /// Offset of one step of `tile` pixels in this heading.
    pub fn step(self, tile: i32) -> Coords {
        match self {
            Up => (0, -tile),
            Down => (0, tile),
            Left => (-tile, 0),
            Right => (tile, 0),
        }
    }
}

/// The snake's segment chain. Index 0 is the head, the last element is the tip of the tail.
#[derive(Clone, Debug)]
pub struct Snake {
    body: Vec<Coords>,
    heading: Heading,
}

impl Snake {
    pub fn new(body: &[Coords], heading: Heading) -> Self {
        assert!(!body.is_empty(), "a snake needs at least a head");
        Snake { body: body.to_vec(), heading }
    }

    pub fn body(&self) -> &[Coords] {
        &self.body
    }

    pub fn head(&self) -> Coords {
        self.body[0]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn heading(&self) -> Heading {
        self.heading
    }

    /// Turns the snake, unless that would reverse it straight into its neck.
    /// Returns whether the heading changed.
    pub fn set_heading(&mut self, new_heading: Heading) -> bool {
        if new_heading == self.heading.opposite() {
            return false;
        }

        self.heading = new_heading;
        true
    }

    /// Where the head goes on the next step.
    pub fn next_head(&self, tile: i32) -> Coords {
        let (x, y) = self.head();
        let (dx, dy) = self.heading.step(tile);
        (x + dx, y + dy)
    }

    /// Every segment takes its predecessor's position, then the head moves to `new_head`.
    pub fn follow(&mut self, new_head: Coords) {
        let len = self.body.len();
        self.body.copy_within(0..len - 1, 1);
        self.body[0] = new_head;
    }

    /// Prepends `new_head`, so the snake is one segment longer and nothing else moves.
    pub fn grow(&mut self, new_head: Coords) {
        self.body.insert(0, new_head);
    }

    pub fn occupies(&self, pos: Coords) -> bool {
        self.body.contains(&pos)
    }

    pub fn bites_itself(&self) -> bool {
        self.body[1..].contains(&self.head())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn start_snake() -> Snake {
        Snake::new(&[(20, 10), (10, 10), (0, 10)], Right)
    }

    #[test]
    fn opposite_heading_is_rejected() {
        for &current in Heading::ALL.iter() {
            for &wanted in Heading::ALL.iter() {
                let mut snake = Snake::new(&[(50, 50)], current);
                let changed = snake.set_heading(wanted);

                if wanted == current.opposite() {
                    assert!(!changed);
                    assert_eq!(snake.heading(), current);
                } else {
                    assert!(changed);
                    assert_eq!(snake.heading(), wanted);
                }
            }
        }
    }

    #[test]
    fn follow_shifts_every_segment_to_its_predecessor() {
        let mut snake = start_snake();
        let before = snake.body().to_vec();

        let new_head = snake.next_head(10);
        snake.follow(new_head);

        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), (30, 10));
        assert_eq!(&snake.body()[1..], &before[..2]);
    }

    #[test]
    fn follow_around_a_corner() {
        let mut snake = start_snake();
        snake.set_heading(Down);
        let new_head = snake.next_head(10);
        snake.follow(new_head);

        assert_eq!(snake.body(), &[(20, 20), (20, 10), (10, 10)]);
    }

    #[test]
    fn single_segment_follow_only_moves_the_head() {
        let mut snake = Snake::new(&[(0, 0)], Down);
        snake.follow((0, 10));
        assert_eq!(snake.body(), &[(0, 10)]);
    }

    #[test]
    fn grow_prepends_without_moving_the_rest() {
        let mut snake = start_snake();
        snake.grow((30, 10));

        assert_eq!(snake.len(), 4);
        assert_eq!(snake.body(), &[(30, 10), (20, 10), (10, 10), (0, 10)]);
    }

    #[test]
    fn detects_self_bite() {
        let mut snake = Snake::new(&[(20, 20), (20, 10), (10, 10), (10, 20), (10, 30)], Left);
        assert!(!snake.bites_itself());

        let new_head = snake.next_head(10);
        snake.follow(new_head);
        assert_eq!(snake.head(), (10, 20));
        assert!(snake.bites_itself());
    }

    #[test]
    fn next_head_steps_one_tile() {
        let snake = Snake::new(&[(20, 20)], Up);
        assert_eq!(snake.next_head(10), (20, 10));
        assert_eq!(Left.step(5), (-5, 0));
    }
}
