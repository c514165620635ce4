pub mod opengl;
