fn main() {
    learnify_web::run();
}
