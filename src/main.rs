fn main() {
    kanban_board::run();
}
