//! Hand-written fallback scripts, keyed by topic.
//!
//! A closed catalog modeled as a tagged enumeration: each topic carries its
//! keyword set and a fixed, always-valid script body. The selector scores
//! topics by keyword-substring overlap against the concept; the strict
//! maximum wins, ties keep the first-seen maximum, and a zero score falls
//! back to the generic visualization.

use strum::IntoEnumIterator;

/// The fixed set of template topics, in selection-priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter, strum::Display)]
pub enum Topic {
    /// Right triangles and a² + b² = c²
    Pythagorean,
    /// Parabolas and x²
    Quadratic,
    /// Sine, cosine and the unit circle
    Trigonometry,
    /// 3D surface plots
    Surface3d,
    /// Spheres and their volume
    Sphere,
    /// Cubes and surface area
    Cube,
    /// Derivatives as slopes
    Derivative,
    /// Integrals as areas
    Integral,
    /// Matrix multiplication
    Matrix,
    /// Eigenvalues and eigenvectors
    Eigenvalue,
    /// Complex numbers
    Complex,
    /// Ordinary differential equations
    DifferentialEquation,
}

impl Topic {
    /// Keyword substrings that vote for this topic.
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Topic::Pythagorean => &["pythagoras", "pythagorean", "right triangle", "hypotenuse"],
            Topic::Quadratic => &["quadratic", "parabola", "x squared", "x^2"],
            Topic::Trigonometry => &["sine", "cosine", "trigonometry", "trig", "unit circle"],
            Topic::Surface3d => &["3d surface", "surface plot", "3d plot", "three dimensional"],
            Topic::Sphere => &["sphere", "ball", "spherical"],
            Topic::Cube => &["cube", "cubic", "box"],
            Topic::Derivative => &["derivative", "differentiation", "slope", "rate of change"],
            Topic::Integral => &["integration", "integral", "area under curve", "antiderivative"],
            Topic::Matrix => &["matrix", "matrices", "linear transformation"],
            Topic::Eigenvalue => &["eigenvalue", "eigenvector", "characteristic"],
            Topic::Complex => &["complex", "imaginary", "complex plane"],
            Topic::DifferentialEquation => &["differential equation", "ode", "pde"],
        }
    }

    /// The fixed script body for this topic.
    pub fn body(&self) -> &'static str {
        match self {
            Topic::Pythagorean => PYTHAGOREAN,
            Topic::Quadratic => QUADRATIC,
            Topic::Trigonometry => TRIGONOMETRY,
            Topic::Surface3d => SURFACE_3D,
            Topic::Sphere => SPHERE,
            Topic::Cube => CUBE,
            Topic::Derivative => DERIVATIVE,
            Topic::Integral => INTEGRAL,
            Topic::Matrix => MATRIX,
            Topic::Eigenvalue => EIGENVALUE,
            Topic::Complex => COMPLEX,
            Topic::DifferentialEquation => DIFFERENTIAL_EQUATION,
        }
    }
}

/// Pick the template for a concept. Deterministic given the fixed catalog.
pub fn select_template(concept: &str) -> &'static str {
    let concept = concept.trim().to_lowercase();

    let mut best: Option<Topic> = None;
    let mut max_matches = 0usize;
    for topic in Topic::iter() {
        let matches = topic
            .keywords()
            .iter()
            .filter(|keyword| concept.contains(*keyword))
            .count();
        if matches > max_matches {
            max_matches = matches;
            best = Some(topic);
        }
    }

    match best {
        Some(topic) if max_matches > 0 => topic.body(),
        _ => BASIC_VISUALIZATION,
    }
}

const PYTHAGOREAN: &str = r##"from manim import *

class MainScene(Scene):
    def construct(self):
        # Phase 1: Introduction
        title = Text("The Pythagorean Theorem", font_size=48, color=YELLOW)
        subtitle = Text("One of Mathematics' Most Important Discoveries", font_size=24, color="#00FFFF")
        subtitle.next_to(title, DOWN, buff=0.5)

        self.play(Write(title), run_time=3)
        self.play(Write(subtitle), run_time=2)
        self.wait(4)

        historical = Text("Discovered around 500 BC by Pythagoras", font_size=20, color=WHITE)
        historical.next_to(subtitle, DOWN, buff=0.5)
        self.play(Write(historical), run_time=2)
        self.wait(3)
        self.play(FadeOut(title), FadeOut(subtitle), FadeOut(historical), run_time=2)

        # Phase 2: Build a right triangle
        axes = Axes(x_range=[0, 6], y_range=[0, 5], x_length=8, y_length=6)
        self.play(Create(axes), run_time=2)

        point_a = Dot(axes.c2p(1, 1), color=YELLOW, radius=0.08)
        point_b = Dot(axes.c2p(4, 1), color=YELLOW, radius=0.08)
        point_c = Dot(axes.c2p(4, 4), color=YELLOW, radius=0.08)
        self.play(Create(point_a), Create(point_b), Create(point_c), run_time=2)

        side_ab = Line(point_a.get_center(), point_b.get_center(), color=BLUE, stroke_width=4)
        side_bc = Line(point_b.get_center(), point_c.get_center(), color=RED, stroke_width=4)
        side_ac = Line(point_a.get_center(), point_c.get_center(), color=YELLOW, stroke_width=4)
        self.play(Create(side_ab), run_time=1.5)
        self.play(Create(side_bc), run_time=1.5)
        self.play(Create(side_ac), run_time=1.5)

        right_angle = Square(side_length=0.3, color=GREEN).move_to(point_b.get_center() + UP*0.15 + LEFT*0.15)
        self.play(Create(right_angle), run_time=1)

        side_a_label = Text("a = 3", font_size=28, color=BLUE).next_to(side_ab, DOWN, buff=0.3)
        side_b_label = Text("b = 4", font_size=28, color=RED).next_to(side_bc, RIGHT, buff=0.3)
        side_c_label = Text("c = ?", font_size=28, color=YELLOW).next_to(side_ac.get_center(), LEFT, buff=0.3)
        self.play(Write(side_a_label), Write(side_b_label), Write(side_c_label), run_time=2)
        self.wait(2)

        # Phase 3: The theorem
        theorem_statement = Text("The Theorem States:", font_size=28, color=GREEN)
        theorem_equation = Text("a² + b² = c²", font_size=40, color=WHITE)
        theorem_meaning = Text("The sum of squares of legs equals square of hypotenuse", font_size=18, color=GRAY)
        theorem_group = VGroup(theorem_statement, theorem_equation, theorem_meaning)
        theorem_group.arrange(DOWN, buff=0.4)
        theorem_group.to_corner(UL)

        self.play(Write(theorem_statement), run_time=2)
        self.play(Write(theorem_equation), run_time=3)
        self.play(Write(theorem_meaning), run_time=2)
        self.wait(3)

        # Phase 4: Step-by-step calculation
        step1 = Text("3² + 4² = c²", font_size=32, color=WHITE)
        step2 = Text("9 + 16 = c²", font_size=32, color=WHITE)
        step3 = Text("25 = c²", font_size=32, color=WHITE)
        step4 = Text("c = √25 = 5", font_size=32, color=YELLOW)
        steps_group = VGroup(step1, step2, step3, step4)
        steps_group.arrange(DOWN, buff=0.3)
        steps_group.next_to(theorem_group, DOWN, buff=0.5)

        for step in steps_group:
            self.play(Write(step), run_time=1.5)
            self.wait(1)

        new_c_label = Text("c = 5", font_size=28, color=YELLOW).move_to(side_c_label.get_center())
        self.play(Transform(side_c_label, new_c_label), run_time=2)
        self.wait(3)

        # Phase 5: Visual proof with square areas
        self.play(FadeOut(steps_group), FadeOut(theorem_group), run_time=2)
        area_a = Text("Area = 3² = 9", font_size=20, color=BLUE).to_corner(DL)
        area_b = Text("Area = 4² = 16", font_size=20, color=RED).next_to(area_a, UP, aligned_edge=LEFT)
        final_eq = Text("9 + 16 = 25 ✓", font_size=36, color=GREEN).next_to(area_b, UP, aligned_edge=LEFT)
        self.play(Write(area_a), run_time=2)
        self.play(Write(area_b), run_time=2)
        self.play(Write(final_eq), run_time=3)
        self.wait(3)

        # Phase 6: Summary
        summary_points = VGroup(
            Text("✓ Pythagorean theorem: a² + b² = c²", font_size=24, color=WHITE),
            Text("✓ Only works for right triangles", font_size=24, color=WHITE),
            Text("✓ Fundamental tool in mathematics", font_size=24, color=WHITE)
        )
        summary_points.arrange(DOWN, aligned_edge=LEFT, buff=0.4)
        summary_points.to_edge(DOWN)
        for point in summary_points:
            self.play(Write(point), run_time=1.5)
        self.wait(4)"##;

const QUADRATIC: &str = r##"from manim import *

class MainScene(Scene):
    def construct(self):
        axes = Axes(
            x_range=[-4, 4],
            y_range=[-2, 8],
            axis_config={"include_tip": True}
        )
        x_label = Text("x").next_to(axes.x_axis.get_end(), RIGHT)
        y_label = Text("y").next_to(axes.y_axis.get_end(), UP)

        def func(x):
            return x**2

        graph = axes.plot(func, color=BLUE, x_range=[-3, 3])
        equation = Text("f(x) = x²").to_corner(UL)

        x = ValueTracker(-3)
        dot = always_redraw(
            lambda: Dot(axes.c2p(x.get_value(), func(x.get_value())), color=YELLOW)
        )
        v_line = always_redraw(
            lambda: axes.get_vertical_line(
                axes.input_to_graph_point(x.get_value(), graph), color=RED
            )
        )
        h_line = always_redraw(
            lambda: axes.get_horizontal_line(
                axes.input_to_graph_point(x.get_value(), graph), color=GREEN
            )
        )

        self.play(Create(axes), Write(x_label), Write(y_label))
        self.play(Create(graph))
        self.play(Write(equation))
        self.play(Create(dot), Create(v_line), Create(h_line))

        self.play(
            x.animate.set_value(3),
            run_time=6,
            rate_func=there_and_back
        )
        self.wait()"##;

const TRIGONOMETRY: &str = r##"from manim import *

class MainScene(Scene):
    def construct(self):
        title = Text("Trigonometry: Unit Circle", font_size=44, color=YELLOW)
        subtitle = Text("Understanding Sine and Cosine", font_size=28, color="#00FFFF")
        subtitle.next_to(title, DOWN, buff=0.5)
        self.play(Write(title), run_time=2)
        self.play(Write(subtitle), run_time=1.5)
        self.wait(2)
        self.play(FadeOut(title), FadeOut(subtitle))

        axes = Axes(
            x_range=[-1.5, 1.5, 0.5], y_range=[-1.5, 1.5, 0.5],
            x_length=6, y_length=6,
            axis_config={"include_tip": True}
        )
        circle = Circle(radius=2, color=WHITE, stroke_width=3)
        circle_label = Text("Unit Circle (r = 1)", font_size=24, color=WHITE).to_corner(UL)
        self.play(Create(axes), run_time=2)
        self.play(Create(circle), Write(circle_label), run_time=2)

        concept_text = Text("Any point on unit circle: (cos θ, sin θ)", font_size=24, color=WHITE)
        concept_text.next_to(circle_label, DOWN, buff=0.3)
        self.play(Write(concept_text), run_time=2)
        self.wait(2)

        theta = ValueTracker(0)
        radius_line = always_redraw(
            lambda: Line(
                start=ORIGIN,
                end=circle.point_at_angle(theta.get_value()),
                color=YELLOW,
                stroke_width=4
            )
        )
        moving_dot = always_redraw(
            lambda: Dot(circle.point_at_angle(theta.get_value()), color=YELLOW, radius=0.08)
        )
        x_projection = always_redraw(
            lambda: DashedLine(
                start=circle.point_at_angle(theta.get_value()),
                end=[circle.point_at_angle(theta.get_value())[0], 0, 0],
                color=BLUE,
                stroke_width=3
            )
        )
        y_projection = always_redraw(
            lambda: DashedLine(
                start=circle.point_at_angle(theta.get_value()),
                end=[0, circle.point_at_angle(theta.get_value())[1], 0],
                color=RED,
                stroke_width=3
            )
        )
        cos_text = always_redraw(
            lambda: Text(
                f"cos θ = {np.cos(theta.get_value()):.2f}",
                font_size=20,
                color=BLUE
            ).to_corner(UR)
        )
        sin_text = always_redraw(
            lambda: Text(
                f"sin θ = {np.sin(theta.get_value()):.2f}",
                font_size=20,
                color=RED
            ).next_to(cos_text, DOWN, buff=0.2)
        )

        self.play(Create(radius_line), Create(moving_dot), run_time=2)
        self.play(Create(x_projection), Create(y_projection), Write(cos_text), Write(sin_text), run_time=2)
        self.wait(2)

        completion_text = Text("Complete rotation: 0 to 2π", font_size=24, color=PURPLE)
        completion_text.move_to(DOWN * 2.5)
        self.play(Write(completion_text), run_time=1)
        self.play(theta.animate.set_value(2*PI), run_time=3, rate_func=linear)
        self.wait(1)

        exact_values = Text("sin(60°) = √3/2, cos(60°) = 1/2", font_size=18, color=WHITE)
        exact_values.next_to(completion_text, DOWN, buff=0.3)
        self.play(Write(exact_values), run_time=2)
        self.wait(2)

        summary = Text("Unit circle: Foundation of trigonometry!", font_size=28, color=GREEN)
        summary.move_to(DOWN * 3.5)
        self.play(Write(summary), run_time=2)
        self.wait(3)"##;

const SURFACE_3D: &str = r##"from manim import *

class MainScene(ThreeDScene):
    def construct(self):
        # Configure the scene
        self.set_camera_orientation(phi=75 * DEGREES, theta=30 * DEGREES)

        axes = ThreeDAxes()

        def func(x, y):
            return np.sin(x) * np.cos(y)

        surface = Surface(
            lambda u, v: axes.c2p(u, v, func(u, v)),
            u_range=[-3, 3],
            v_range=[-3, 3],
            resolution=32,
            checkerboard_colors=[BLUE_D, BLUE_E]
        )

        x_label = Text("x").next_to(axes.x_axis.get_end(), RIGHT)
        y_label = Text("y").next_to(axes.y_axis.get_end(), UP)
        z_label = Text("z").next_to(axes.z_axis.get_end(), OUT)

        self.begin_ambient_camera_rotation(rate=0.2)
        self.play(Create(axes), Write(x_label), Write(y_label), Write(z_label))
        self.play(Create(surface))
        self.wait(2)
        self.stop_ambient_camera_rotation()
        self.wait()"##;

const SPHERE: &str = r##"from manim import *

class MainScene(ThreeDScene):
    def construct(self):
        # Configure the scene
        self.set_camera_orientation(phi=75 * DEGREES, theta=30 * DEGREES)

        axes = ThreeDAxes()

        sphere = Surface(
            lambda u, v: np.array([
                np.cos(u) * np.cos(v),
                np.cos(u) * np.sin(v),
                np.sin(u)
            ]),
            u_range=[-PI/2, PI/2],
            v_range=[0, TAU],
            checkerboard_colors=[BLUE_D, BLUE_E]
        )

        x_label = Text("x").next_to(axes.x_axis.get_end(), RIGHT)
        y_label = Text("y").next_to(axes.y_axis.get_end(), UP)
        z_label = Text("z").next_to(axes.z_axis.get_end(), OUT)

        self.begin_ambient_camera_rotation(rate=0.2)
        self.play(Create(axes), Write(x_label), Write(y_label), Write(z_label))
        self.play(Create(sphere))
        self.wait(2)
        self.stop_ambient_camera_rotation()
        self.wait()"##;

const CUBE: &str = r##"from manim import *

class MainScene(ThreeDScene):
    def construct(self):
        self.set_camera_orientation(phi=75 * DEGREES, theta=30 * DEGREES)
        axes = ThreeDAxes(
            x_range=[-3, 3],
            y_range=[-3, 3],
            z_range=[-3, 3]
        )

        cube = Cube(side_length=2, fill_opacity=0.7, stroke_width=2)
        cube.set_color(BLUE)

        a_label = Text("a", font_size=36).set_color(YELLOW)
        a_label.next_to(cube, RIGHT)

        area_formula = Text("A = 6a^2").to_corner(UL)

        self.add(axes)
        self.play(Create(cube))
        self.wait()
        self.play(Write(a_label))
        self.wait()
        self.play(Write(area_formula))
        self.wait()

        self.begin_ambient_camera_rotation(rate=0.2)
        self.wait(5)
        self.stop_ambient_camera_rotation()"##;

const DERIVATIVE: &str = r##"from manim import *

class MainScene(Scene):
    def construct(self):
        title = Text("Understanding Derivatives", font_size=48, color=YELLOW)
        subtitle = Text("The Slope of a Function", font_size=32, color="#00FFFF")
        subtitle.next_to(title, DOWN, buff=0.5)
        self.play(Write(title), run_time=2)
        self.play(Write(subtitle), run_time=1.5)
        self.wait(2)
        self.play(FadeOut(title), FadeOut(subtitle))

        axes = Axes(
            x_range=[-3, 3, 1], y_range=[-1, 3, 1],
            x_length=10, y_length=6,
            axis_config={"include_tip": True}
        )
        x_label = Text("x", font_size=24).next_to(axes.x_axis.get_end(), RIGHT)
        y_label = Text("y", font_size=24).next_to(axes.y_axis.get_end(), UP)
        self.play(Create(axes), Write(x_label), Write(y_label), run_time=2)

        def func(x):
            return 0.3 * x**2 + 0.5

        graph = axes.plot(func, color=BLUE, x_range=[-2.5, 2.5])
        func_label = Text("f(x) = x²", font_size=32, color=BLUE).to_corner(UL)
        self.play(Create(graph), run_time=2)
        self.play(Write(func_label), run_time=1.5)

        concept_text = Text("Derivative = Rate of Change = Slope", font_size=28, color="#00FFFF")
        concept_text.next_to(func_label, DOWN, buff=0.5)
        self.play(Write(concept_text), run_time=2)
        self.wait(3)

        x_val = 1.5
        slope = 2 * 0.3 * x_val
        point = Dot(axes.c2p(x_val, func(x_val)), color=YELLOW, radius=0.08)
        tangent_line = axes.plot(
            lambda x: slope * (x - x_val) + func(x_val),
            color=RED, x_range=[x_val-1, x_val+1]
        )
        self.play(Create(point), run_time=1)
        self.play(Create(tangent_line), run_time=2)

        tangent_label = Text(f"Tangent Line (slope = {slope:.1f})", font_size=24, color=RED)
        tangent_label.next_to(concept_text, DOWN, buff=0.3)
        self.play(Write(tangent_label), run_time=1.5)
        self.wait(2)

        derivative_title = Text("Derivative Formula:", font_size=32, color=GREEN)
        derivative_formula = Text("f'(x) = lim[h→0] [f(x+h) - f(x)] / h", font_size=28, color=WHITE)
        derivative_title.next_to(tangent_label, DOWN, buff=0.5)
        derivative_formula.next_to(derivative_title, DOWN, buff=0.3)
        self.play(Write(derivative_title), run_time=1.5)
        self.play(Write(derivative_formula), run_time=2)
        self.wait(2)

        calc_step1 = Text("f'(x) = 2x", font_size=32, color=WHITE)
        calc_step2 = Text(f"At x = {x_val}: f'({x_val}) = 2({x_val}) = {2*x_val}", font_size=28, color=YELLOW)
        calc_group = VGroup(calc_step1, calc_step2)
        calc_group.arrange(DOWN, buff=0.3)
        calc_group.next_to(derivative_formula, DOWN, buff=0.5)
        for calc in calc_group:
            self.play(Write(calc), run_time=1.5)
            self.wait(1)

        summary = Text("Derivative = Instantaneous Rate of Change", font_size=32, color=GREEN)
        summary.move_to(DOWN * 3)
        self.play(Write(summary), run_time=2)
        self.wait(3)"##;

const INTEGRAL: &str = r##"from manim import *

class MainScene(Scene):
    def construct(self):
        title = Text("Understanding Integration", font_size=44, color=YELLOW)
        subtitle = Text("Area Under the Curve", font_size=28, color="#00FFFF")
        subtitle.next_to(title, DOWN, buff=0.5)
        self.play(Write(title), run_time=2)
        self.play(Write(subtitle), run_time=1.5)
        self.wait(2)
        self.play(FadeOut(title), FadeOut(subtitle))

        axes = Axes(
            x_range=[-1, 4, 1], y_range=[-1, 3, 1],
            x_length=10, y_length=6,
            axis_config={"include_tip": True}
        )
        self.play(Create(axes), run_time=2)

        def func(x):
            return 0.3 * x**2 + 0.5

        graph = axes.plot(func, color=BLUE, x_range=[-0.5, 3.5])
        func_label = Text("f(x) = x²", font_size=32, color=BLUE).to_corner(UL)
        self.play(Create(graph), run_time=2)
        self.play(Write(func_label), run_time=1.5)

        concept_text = Text("Find the area under the curve", font_size=24, color=WHITE)
        concept_text.next_to(func_label, DOWN, buff=0.3)
        interval_text = Text("From x = 0 to x = 2", font_size=24, color=ORANGE)
        interval_text.next_to(concept_text, DOWN, buff=0.3)
        self.play(Write(concept_text), run_time=2)
        self.play(Write(interval_text), run_time=1)

        left_line = DashedLine(
            start=axes.c2p(0, 0), end=axes.c2p(0, func(0)),
            color=ORANGE, stroke_width=3
        )
        right_line = DashedLine(
            start=axes.c2p(2, 0), end=axes.c2p(2, func(2)),
            color=ORANGE, stroke_width=3
        )
        self.play(Create(left_line), Create(right_line), run_time=2)

        area = axes.get_area(graph, x_range=[0, 2], color="#00FFFF", opacity=0.6)
        self.play(FadeIn(area), run_time=2)
        self.wait(2)

        integral_notation = Text("∫₀² x² dx", font_size=32, color=WHITE)
        integral_notation.next_to(interval_text, DOWN, buff=0.5)
        self.play(Write(integral_notation), run_time=1.5)

        step1 = Text("= [x³/3]₀²", font_size=28, color=WHITE)
        step2 = Text("= 8/3 - 0", font_size=28, color=WHITE)
        step3 = Text("= 8/3 ≈ 2.67", font_size=28, color=YELLOW)
        steps = VGroup(step1, step2, step3)
        steps.arrange(DOWN, buff=0.2)
        steps.next_to(integral_notation, DOWN, buff=0.3)
        for step in steps:
            self.play(Write(step), run_time=1)
            self.wait(0.5)

        ftc_content = Text("∫ f'(x) dx = f(x) + C", font_size=28, color=WHITE)
        ftc_explanation = Text("Integration is the reverse of differentiation!", font_size=20, color=GREEN)
        ftc_group = VGroup(ftc_content, ftc_explanation)
        ftc_group.arrange(DOWN, buff=0.3)
        ftc_group.move_to(DOWN * 2)
        for item in ftc_group:
            self.play(Write(item), run_time=1.2)
        self.wait(2)

        summary = Text("Integration: Finding areas and accumulation!", font_size=28, color=YELLOW)
        summary.move_to(DOWN * 3.5)
        self.play(Write(summary), run_time=2)
        self.wait(3)"##;

const MATRIX: &str = r##"from manim import *

class MainScene(Scene):
    def construct(self):
        matrix_a = VGroup(
            Text("2  1"),
            Text("1  3")
        ).arrange(DOWN)
        matrix_a.add(SurroundingRectangle(matrix_a))

        matrix_b = VGroup(
            Text("1"),
            Text("2")
        ).arrange(DOWN)
        matrix_b.add(SurroundingRectangle(matrix_b))

        times = Text("×")
        equals = Text("=")

        result = VGroup(
            Text("4"),
            Text("7")
        ).arrange(DOWN)
        result.add(SurroundingRectangle(result))

        equation = VGroup(
            matrix_a, times, matrix_b,
            equals, result
        ).arrange(RIGHT)

        calc1 = Text("= [2(1) + 1(2)]")
        calc2 = Text("= [2 + 2]")
        calc3 = Text("= [4]")
        calcs = VGroup(calc1, calc2, calc3).arrange(DOWN)
        calcs.next_to(equation, DOWN, buff=1)

        self.play(Create(matrix_a))
        self.play(Create(matrix_b))
        self.play(Write(times), Write(equals))
        self.play(Create(result))
        self.wait()

        self.play(Write(calc1))
        self.play(Write(calc2))
        self.play(Write(calc3))
        self.wait()"##;

const EIGENVALUE: &str = r##"from manim import *

class MainScene(Scene):
    def construct(self):
        matrix = VGroup(
            Text("2  1"),
            Text("1  2")
        ).arrange(DOWN)
        matrix.add(SurroundingRectangle(matrix))

        vector = VGroup(
            Text("v₁"),
            Text("v₂")
        ).arrange(DOWN)
        vector.add(SurroundingRectangle(vector))

        lambda_text = Text("λ")
        equation = Text("Av = λv")

        group = VGroup(matrix, vector, lambda_text, equation).arrange(RIGHT)
        group.to_edge(UP)

        char_eq = Text("det(A - λI) = 0")
        expanded = Text("|2-λ  1|")
        expanded2 = Text("|1  2-λ|")
        solved = Text("(2-λ)² - 1 = 0")
        result = Text("λ = 1, 3")

        steps = VGroup(
            char_eq, expanded, expanded2,
            solved, result
        ).arrange(DOWN)
        steps.next_to(group, DOWN, buff=1)

        self.play(Create(matrix), Create(vector))
        self.play(Write(lambda_text), Write(equation))
        self.wait()

        self.play(Write(char_eq))
        self.play(Write(expanded), Write(expanded2))
        self.play(Write(solved))
        self.play(Write(result))
        self.wait()"##;

const COMPLEX: &str = r##"from manim import *

class MainScene(Scene):
    def construct(self):
        # Phase 1: Introduction
        title = Text("Complex Numbers", font_size=48, color=YELLOW)
        subtitle = Text("Extending the Real Number System", font_size=28, color="#00FFFF")
        subtitle.next_to(title, DOWN, buff=0.5)
        self.play(Write(title), run_time=3)
        self.play(Write(subtitle), run_time=2)
        self.wait(3)
        self.play(FadeOut(title), FadeOut(subtitle), run_time=2)

        # Phase 2: The problem with square roots
        problem_title = Text("The Problem: √(-1) = ?", font_size=36, color=RED)
        self.play(Write(problem_title), run_time=2)
        problem_explanation = VGroup(
            Text("• 2² = 4, so √4 = 2", font_size=20, color=WHITE),
            Text("• But what about √(-4)?", font_size=20, color=RED),
            Text("• No real number squared gives -4!", font_size=20, color=RED)
        )
        problem_explanation.arrange(DOWN, aligned_edge=LEFT, buff=0.3)
        problem_explanation.next_to(problem_title, DOWN, buff=0.5)
        for line in problem_explanation:
            self.play(Write(line), run_time=1.5)
            self.wait(1)
        self.play(FadeOut(problem_title), FadeOut(problem_explanation), run_time=2)

        # Phase 3: The imaginary unit
        solution_title = Text("The Solution: The Imaginary Unit 'i'", font_size=32, color=GREEN)
        self.play(Write(solution_title), run_time=2)
        i_definition = VGroup(
            Text("Define: i = √(-1)", font_size=36, color=YELLOW),
            Text("Therefore: i² = -1", font_size=32, color=YELLOW)
        )
        i_definition.arrange(DOWN, buff=0.4)
        i_definition.next_to(solution_title, DOWN, buff=0.5)
        for line in i_definition:
            self.play(Write(line), run_time=2)
            self.wait(1)
        self.play(FadeOut(solution_title), FadeOut(i_definition), run_time=2)

        # Phase 4: Standard form and examples
        form_title = Text("Standard Form: a + bi", font_size=36, color="#00FFFF")
        self.play(Write(form_title), run_time=2)
        examples = VGroup(
            Text("3 + 4i  (a=3, b=4)", font_size=20, color=WHITE),
            Text("2 - 5i  (a=2, b=-5)", font_size=20, color=WHITE),
            Text("7 + 0i = 7  (purely real)", font_size=20, color=BLUE),
            Text("0 + 3i = 3i  (purely imaginary)", font_size=20, color=RED)
        )
        examples.arrange(DOWN, aligned_edge=LEFT, buff=0.2)
        examples.next_to(form_title, DOWN, buff=0.5)
        for line in examples:
            self.play(Write(line), run_time=1.5)
        self.wait(2)

        # Phase 5: The complex plane
        self.play(FadeOut(form_title), FadeOut(examples), run_time=1)
        plane = ComplexPlane(x_range=[-4, 4], y_range=[-3, 3]).add_coordinates()
        plane_title = Text("The Complex Plane", font_size=28, color=GREEN).to_corner(UL)
        self.play(Create(plane), Write(plane_title), run_time=3)
        point = Dot(plane.n2p(3 + 2j), color=YELLOW)
        point_label = Text("3 + 2i", font_size=24, color=YELLOW).next_to(point, UR, buff=0.2)
        self.play(Create(point), Write(point_label), run_time=2)
        self.wait(3)"##;

const DIFFERENTIAL_EQUATION: &str = r##"from manim import *

class MainScene(Scene):
    def construct(self):
        title = Text("Differential Equations", font_size=44, color=YELLOW)
        self.play(Write(title), run_time=2)
        self.wait(2)
        self.play(FadeOut(title), run_time=1)

        eq = Text("y' + 2y = e^x", font_size=36, color=WHITE)

        # Solution steps
        step1 = Text("y = e^{-2x} ∫ e^x · e^{2x} dx", font_size=28, color=WHITE)
        step2 = Text("y = e^{-2x} ∫ e^{3x} dx", font_size=28, color=WHITE)
        step3 = Text("y = e^{-2x} · (1/3)e^{3x} + Ce^{-2x}", font_size=28, color=WHITE)
        step4 = Text("y = (1/3)e^x + Ce^{-2x}", font_size=28, color=YELLOW)

        VGroup(eq, step1, step2, step3, step4).arrange(DOWN, buff=0.5)

        axes = Axes(
            x_range=[-2, 2],
            y_range=[-2, 2],
            axis_config={"include_tip": True}
        )
        graph = axes.plot(
            lambda x: (1/3)*np.exp(x),
            color=YELLOW
        )

        self.play(Write(eq))
        self.wait()
        self.play(Write(step1))
        self.wait()
        self.play(Write(step2))
        self.wait()
        self.play(Write(step3))
        self.wait()
        self.play(Write(step4))
        self.wait()

        self.play(FadeOut(VGroup(eq, step1, step2, step3, step4)))
        self.play(Create(axes), Create(graph))
        self.wait()"##;

const BASIC_VISUALIZATION: &str = r##"from manim import *

class MainScene(Scene):
    def construct(self):
        title = Text("Mathematical Function Visualization", font_size=40, color=YELLOW)
        subtitle = Text("Exploring Trigonometric Functions", font_size=28, color="#00FFFF")
        subtitle.next_to(title, DOWN, buff=0.5)
        self.play(Write(title), run_time=2)
        self.play(Write(subtitle), run_time=1.5)
        self.wait(2)
        self.play(FadeOut(title), FadeOut(subtitle))

        axes = Axes(
            x_range=[-2*PI, 2*PI, PI/2], y_range=[-2, 2, 1],
            x_length=12, y_length=6,
            axis_config={"include_tip": True}
        )
        x_label = Text("x", font_size=24).next_to(axes.x_axis.get_end(), RIGHT)
        y_label = Text("y", font_size=24).next_to(axes.y_axis.get_end(), UP)
        self.play(Create(axes), Write(x_label), Write(y_label), run_time=2)

        sin_title = Text("Sine Function", font_size=32, color=BLUE).to_corner(UL)
        sin_equation = Text("f(x) = sin(x)", font_size=28, color=BLUE)
        sin_equation.next_to(sin_title, DOWN, buff=0.3)
        self.play(Write(sin_title), Write(sin_equation), run_time=2)

        sin_graph = axes.plot(lambda x: np.sin(x), color=BLUE, x_range=[-2*PI, 2*PI])
        self.play(Create(sin_graph), run_time=3)
        self.wait(2)

        properties = VGroup(
            Text("• Period: 2π", font_size=20, color=WHITE),
            Text("• Range: [-1, 1]", font_size=20, color=WHITE),
            Text("• Amplitude: 1", font_size=20, color=WHITE)
        )
        properties.arrange(DOWN, aligned_edge=LEFT, buff=0.2)
        properties.next_to(sin_equation, DOWN, buff=0.5)
        for prop in properties:
            self.play(Write(prop), run_time=0.8)
        self.wait(2)

        cos_title = Text("Cosine Function", font_size=28, color=RED)
        cos_equation = Text("g(x) = cos(x)", font_size=24, color=RED)
        cos_title.move_to(UP * 2 + RIGHT * 4)
        cos_equation.next_to(cos_title, DOWN, buff=0.2)
        self.play(Write(cos_title), Write(cos_equation), run_time=2)

        cos_graph = axes.plot(lambda x: np.cos(x), color=RED, x_range=[-2*PI, 2*PI])
        self.play(Create(cos_graph), run_time=3)

        relationship_text = Text("cos(x) = sin(x + π/2)", font_size=24, color=PURPLE)
        relationship_text.next_to(cos_equation, DOWN, buff=0.5)
        self.play(Write(relationship_text), run_time=2)
        self.wait(2)

        summary_group = VGroup(
            Text("• Sine and cosine are periodic functions", font_size=18, color=WHITE),
            Text("• They oscillate between -1 and 1", font_size=18, color=WHITE),
            Text("• Phase difference of π/2 radians", font_size=18, color=WHITE),
            Text("• Fundamental in mathematics and physics", font_size=18, color=WHITE)
        )
        summary_group.arrange(DOWN, aligned_edge=LEFT, buff=0.2)
        summary_group.move_to(DOWN * 2)
        for item in summary_group:
            self.play(Write(item), run_time=0.8)
        self.wait(3)"##;
